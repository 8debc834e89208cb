// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in itinerary: the seed collection and per-day labels.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Activity, ActivityType, DAY_COUNT};
use crate::time_utils::{day_name, long_day_date, short_day_date};

use crate::models::ActivityType::{Accommodation, Meal, Ritual, Sightseeing, Transport};

/// (id, day, time, type, title, location, description)
type SeedEntry = (
    &'static str,
    u8,
    &'static str,
    ActivityType,
    &'static str,
    &'static str,
    &'static str,
);

#[rustfmt::skip]
const SEED: &[SeedEntry] = &[
    // Hari 1
    ("1-1", 1, "11:30", Ritual, "Ziarah Makam Masyayikh, Pelepasan & Keberangkatan", "Tasikmalaya",
        "Rombongan Jamaah Umroh Tasikmalaya. Makan siang, shalat dzuhur dan ashar di MASJID AL FATTAH"),
    ("1-2", 1, "19:00", Accommodation, "Check-in Hotel Transit", "Hotel ZEST BANDARA",
        "Rombongan Jamaah Tasikmalaya arrives at Hotel Transit, Hotel ZEST BANDARA"),
    ("1-3", 1, "20:00", Accommodation, "Check-in Hotel Transit", "Hotel ZEST BANDARA",
        "Rombongan Jamaah Daerah JABODETABEK arrives at Hotel Transit, Hotel ZEST BANDARA"),
    ("1-4", 1, "21:00", Meal, "Makan Malam Bersama", "Hotel ZEST BANDARA",
        "Dinner together at the hotel, followed by preparation for Isya prayer in individual rooms"),
    ("1-5", 1, "22:00", Accommodation, "Istirahat", "Hotel ZEST BANDARA",
        "Rest in preparation for the next day's take-off"),

    // Hari 2
    ("2-1", 2, "03:30", Ritual, "Shalat Tahajjud dan Subuh", "Hotel ZEST BANDARA",
        "Tahajjud and Shubuh prayers individually in Zest Hotel rooms"),
    ("2-2", 2, "06:00", Meal, "Sarapan Pagi", "Hotel ZEST BANDARA",
        "Breakfast at Zest Hotel"),
    ("2-3", 2, "12:00", Ritual, "Shalat Dzuhur dan Ashar Jama'", "Hotel ZEST BANDARA",
        "Dzuhur and Ashar prayers combined (Jama') in individual rooms, followed by preparation for check-out"),
    ("2-4", 2, "14:00", Meal, "Makan Siang dan Briefing", "Terminal 3 Soekarno Hatta",
        "Lunch, briefing for departure from the hotel to Terminal 3 of Soekarno Hatta International Airport, for boarding pass preparation, check-in, and take-off"),
    ("2-5", 2, "18:35", Transport, "Take-off ke DOHA", "Pesawat QR 6380",
        "Take-off towards Transit Airport DOHA with flight QR 6380, estimated arrival at 23:00"),

    // Hari 3
    ("3-1", 3, "00:50", Transport, "Take-off dari DOHA", "Pesawat QR 1184",
        "Take-off from DOHA with flight QR 1184. Jamaah arrives at King Abdul Aziz Jeddah Airport at 03:20"),
    ("3-2", 3, "03:20", Sightseeing, "Tiba di Jeddah dan City Tour Badr", "King Abdul Aziz Jeddah Airport & City Tour Badr",
        "Jamaah proceeds with immigration, baggage claim, etc., then continues to Madinah by BUS. Estimated travel time: +6 hours. City Tour Badr, visiting Makam Syuhada Badr, Masjid Al Arees, Jabal Malaikat, etc. Dzuhur and Ashar prayers combined (Jama') and lunch at a restaurant"),
    ("3-3", 3, "17:00", Accommodation, "Check-in Hotel Madinah", "Hotel Madinah",
        "Jamaah arrives at Hotel Madinah, check-in, and rests briefly"),
    ("3-4", 3, "17:30", Ritual, "Shalat Maghrib dan Isya di Masjidil Nabawi", "Masjidil Nabawi",
        "Jamaah prepares to perform Maghrib and Isya prayers in congregation at Masjidil Nabawi. Dinner at the hotel"),
    ("3-5", 3, "21:30", Accommodation, "Istirahat", "Hotel Madinah",
        "Jamaah returns to the hotel to rest and prepare for the next day's activities"),

    // Hari 4
    ("4-1", 4, "03:00", Ritual, "Shalat Tahajjud dan Subuh di Masjid Nabawi", "Masjid Nabawi",
        "Gather in the lobby for Tahajjud prayer, followed by Shubuh prayer in congregation at Masjid Nabawi"),
    ("4-2", 4, "06:30", Meal, "Sarapan Pagi", "Hotel Madinah",
        "Breakfast"),
    ("4-3", 4, "07:00", Sightseeing, "Madinah City Tour", "Madinah City Tour",
        "Madinah City Tour covering (Masjid Quba, Jabal Uhud, Kebun Kurma, Masjid Qiblatain & Masjid Khandak). A Tasawuf study session will be conducted with Ustadz Abdul Holid"),
    ("4-4", 4, "12:00", Ritual, "Shalat Dzuhur di Masjid Nabawi", "Masjid Nabawi",
        "Dzuhur prayer in congregation at Masjid Nabawi, followed by lunch at the hotel"),
    ("4-5", 4, "15:00", Ritual, "Shalat Ashar di Masjid Nabawi", "Masjid Nabawi",
        "Ashar prayer in congregation at Masjid Nabawi"),
    ("4-6", 4, "17:30", Ritual, "Persiapan Shalat Maghrib dan Isya", "Masjid Nabawi",
        "Preparation to perform Maghrib and Isya prayers in congregation at Masjid Nabawi"),
    ("4-7", 4, "21:30", Accommodation, "Istirahat", "Hotel Madinah",
        "Jamaah returns to the hotel to rest and prepare for the next day's activities"),

    // Hari 5
    ("5-1", 5, "03:00", Ritual, "Shalat Tahajjud dan Subuh di Masjid Nabawi", "Masjid Nabawi",
        "Jemaah berkumpul di Lobby untuk Sholat Tahajjud berjemaah, dilanjutkan Sholat Subuh di Masjid Nabawi Khataman Quran di masjid nabawi"),
    ("5-2", 5, "06:30", Meal, "Sarapan Pagi", "Hotel Madinah",
        "Breakfast"),
    ("5-3", 5, "08:30", Sightseeing, "Tour Dalam Nabawi", "Masjid Nabawi",
        "Tour inside Nabawi"),
    ("5-4", 5, "11:30", Ritual, "Shalat Jum'at di Masjid Nabawi", "Masjid Nabawi",
        "Berkumpul di Lobby untuk Sholat Jum'at berjamaah di Masjid Nabawi, dan dilajutkan makan siang di hotel"),
    ("5-5", 5, "15:30", Ritual, "Shalat Ashar di Masjid Nabawi", "Masjid Nabawi",
        "Asr prayer in congregation at Masjid Nabawi"),
    ("5-6", 5, "16:00", Ritual, "Ziarah Rawdah Jamaah Laki-laki", "Masjid Nabawi",
        "Rawdah Visit for Male Pilgrims *Tentative Time"),
    ("5-7", 5, "17:45", Ritual, "Shalat Maghrib dan Isya di Masjid Nabawi", "Masjid Nabawi",
        "Maghrib and Isha prayer in congregation at Masjid Nabawi, dan dilanjutkan makan malam di hotel"),
    ("5-8", 5, "20:00", Ritual, "Ziarah Rawdah Jamaah Perempuan", "Masjid Nabawi",
        "Rawdah Visit for Female Pilgrims *Tentative Time"),
    ("5-9", 5, "21:45", Accommodation, "Istirahat & Persiapan", "Hotel Madinah",
        "Rest & Preparation for Midnight Wake-up for Tahajjud prayer in congregation"),

    // Hari 6
    ("6-1", 6, "03:00", Ritual, "Shalat Tahajjud dan Subuh di Masjidil Nabawi", "Masjidil Nabawi",
        "Tahajjud prayer, Subuh prayer in congregation at Masjidil Nabawi"),
    ("6-2", 6, "06:30", Meal, "Sarapan Pagi", "Hotel Madinah",
        "Breakfast"),
    ("6-3", 6, "07:00", Accommodation, "Packing Barang", "Hotel Madinah",
        "Packing belongings for preparation to Makkah"),
    ("6-4", 6, "09:00", Accommodation, "Persiapan Bagasi", "Hotel Madinah",
        "Luggage placed in front of each room door"),
    ("6-5", 6, "10:30", Ritual, "Persiapan Shalat", "Masjid Nabawi",
        "Preparation for congregational prayer at Masjid Nabawi"),
    ("6-6", 6, "11:30", Ritual, "Shalat Dzuhur dan Ashar Jama' Taqdim", "Masjid Nabawi",
        "Dhuhr and Asr prayer in combined (jama' Taqdim) congregation at Masjid Nabawi, dilanjutkan makan siang"),
    ("6-7", 6, "13:00", Transport, "Check Out & Berangkat ke Makkah", "Bus ke Makkah",
        "Check Out & Depart to Makkah, untuk Perjalanan Menuju Makkah dengan Bus estimasi Perjalanan -+ 6 Jam. Melaksanakan MIQOT di MASJID BIR ALI"),
    ("6-8", 6, "19:30", Ritual, "Shalat Isya di Masjidil Haram", "Masjidil Haram",
        "Congregation gathers in the Lobby to perform Isha prayer in congregation at Masjidil Haram"),
    ("6-9", 6, "20:30", Ritual, "Umroh PERTAMA", "Masjidil Haram",
        "Then proceed with the FIRST Umrah (Tawwaf, Sai, and Tahalul). After that, return to the hotel and rest for tomorrow's activities"),

    // Hari 7
    ("7-1", 7, "03:00", Ritual, "Shalat Tahajjud dan Subuh di Masjidil Haram", "Masjidil Haram",
        "Congregation gathers in the Lobby for Tahajjud prayer in congregation, followed by Subuh prayer and Quran recitation at Masjidil Haram"),
    ("7-2", 7, "06:30", Meal, "Sarapan Pagi", "Hotel Makkah",
        "Breakfast"),
    ("7-3", 7, "11:30", Ritual, "Shalat Dzuhur di Masjidil Haram", "Masjidil Haram",
        "Gather in the Lobby for Dhuhr prayer in congregation at Masjidil Haram, dan dilajutkan makan siang di hotel"),
    ("7-4", 7, "15:30", Ritual, "Shalat Ashar di Masjidil Haram", "Masjidil Haram",
        "Asr prayer in congregation at Masjidil Haram"),
    ("7-5", 7, "17:45", Ritual, "Shalat Maghrib dan Isya di Masjidil Haram", "Masjidil Haram",
        "Maghrib and Isha prayer in congregation at Masjidil Haram, dan dilanjutkan makan malam di hotel"),
    ("7-6", 7, "21:45", Accommodation, "Istirahat & Persiapan", "Hotel Makkah",
        "Rest & Preparation for Midnight Wake-up for Tahajjud prayer in congregation"),

    // Hari 8
    ("8-1", 8, "03:00", Ritual, "Shalat Tahajjud dan Subuh di Masjidil Haram", "Masjidil Haram",
        "Gather in hotel lobby, depart to Masjidil Haram, perform Tahajjud and I'tikaf, followed by Fajr prayer, Dhikr until sunrise"),
    ("8-2", 8, "06:30", Meal, "Sarapan Pagi", "Hotel Makkah",
        "Breakfast"),
    ("8-3", 8, "07:00", Sightseeing, "Makkah City Tour", "Makkah City Tour",
        "Pilgrims gather in lobby for Makkah City Tour including: Jabal Thawr, Arafat, Muzdalifah, Mina, Thawr Cave, Ma'la. *Dhuhr prayer performed during City Tour. And will attend Tasawwuf lecture with Ustadz Abdul Holid at NAMIROH Mosque"),
    ("8-4", 8, "16:00", Accommodation, "Kembali dari City Tour", "Hotel Makkah",
        "Pilgrims return from City Tour to Hotel for preparation of Asr prayer in Masjidil Haram"),
    ("8-5", 8, "16:00", Ritual, "Umroh KEDUA", "Masjidil Haram",
        "Pilgrims gather in lobby to Masjidil Haram for second Umrah, Tawaf, Sa'i and Tahallul. Then Maghrib and Isha prayers in Masjidil Haram"),
    ("8-6", 8, "21:30", Accommodation, "Istirahat & Persiapan", "Hotel Makkah",
        "Rest & Preparation for Midnight Prayer (Tahajjud)"),

    // Hari 9
    ("9-1", 9, "03:00", Ritual, "Shalat Tahajjud dan Subuh di Masjidil Haram", "Masjidil Haram",
        "Pilgrims gather in Lobby for Tahajjud prayer, followed by Fajr prayer and Khataman Quran in Masjidil Haram"),
    ("9-2", 9, "06:30", Meal, "Sarapan Pagi", "Hotel Makkah",
        "Breakfast"),
    ("9-3", 9, "11:30", Ritual, "Shalat Dzuhur di Masjidil Haram", "Masjidil Haram",
        "Gather in Lobby for Dhuhr prayer in Masjidil Haram, followed by lunch at hotel"),
    ("9-4", 9, "15:30", Ritual, "Shalat Ashar di Masjidil Haram", "Masjidil Haram",
        "Asr prayer in Masjidil Haram"),
    ("9-5", 9, "17:45", Ritual, "Shalat Maghrib dan Isya di Masjidil Haram", "Masjidil Haram",
        "Maghrib and Isha prayers in Masjidil Haram, followed by dinner at hotel"),
    ("9-6", 9, "21:45", Accommodation, "Istirahat & Persiapan", "Hotel Makkah",
        "Rest & Preparation for Midnight Prayer (Tahajjud)"),

    // Hari 10
    ("10-1", 10, "03:00", Ritual, "Shalat Tahajjud dan Subuh di Masjidil Haram", "Masjidil Haram",
        "Gather in hotel lobby, depart to Masjidil Haram, Tahajjud prayer, and I'tikaf followed by Fajr prayer until sunrise. Then perform Tawwaf Wada (Farewell Tawaf)"),
    ("10-2", 10, "06:30", Meal, "Sarapan dan Persiapan Check Out", "Hotel Makkah",
        "Breakfast and Check out preparation"),
    ("10-3", 10, "10:00", Accommodation, "Persiapan Bagasi", "Hotel Makkah",
        "All pilgrim luggage stored in front of their respective rooms"),
    ("10-4", 10, "11:00", Accommodation, "Check Out dan Persiapan Shalat", "Hotel Makkah",
        "Check out and preparation for Dhuhr prayer"),
    ("10-5", 10, "12:00", Ritual, "Shalat Dzuhur", "Masjidil Haram",
        "Dhuhr prayer"),
    ("10-6", 10, "13:00", Transport, "Perjalanan ke Jeddah", "King Abdul Aziz Airport",
        "Travel to Jeddah, King Abdul Aziz Airport"),
    ("10-7", 10, "18:00", Transport, "Check-in dan Immigration", "King Abdul Aziz Airport",
        "Baggage check-in, Immigration, and Boarding process"),
    ("10-8", 10, "22:35", Transport, "Take-off ke DOHA", "Pesawat QR 1189",
        "Take off to Transit Airport DOHA with QR 1189, estimated arrival at 00:55+1"),

    // Hari 11
    ("11-1", 11, "00:55", Transport, "Take-off dari DOHA", "Pesawat QR 6381",
        "Take off from DOHA with QR 6381 and pilgrims arrive at Soekarno Hatta International Airport, Indonesia at 15:00"),
    ("11-2", 11, "15:00", Transport, "Tiba di Indonesia", "Bandara Soekarno Hatta",
        "Arrive at Soekarno Hatta International Airport CGK Indonesia. Baggage check-out, Immigration process, etc"),
    ("11-3", 11, "17:00", Ritual, "Berkumpul dan Doa Syukur", "Bandara Soekarno Hatta",
        "Gather and pray, giving thanks for completing Umrah, and return to respective regions. Tasikmalaya group departs by BUS with travel time ~6 hours"),
    ("11-4", 11, "22:00", Ritual, "Tiba di Masjid Al Fattah", "Masjid Al Fattah",
        "Tasikmalaya group arrives at Al Fattah Mosque"),
    ("11-5", 11, "23:00", Accommodation, "Tiba di Rumah Masing-masing", "Rumah Masing-masing",
        "Arrive at respective homes, safely and hopefully all 10 days of Umrah pilgrimage with Idrisiyyah Tour Travel are accepted by Allah SWT. Aamiin"),
];

/// Fresh copy of the seed collection, every activity open.
pub fn seed_activities() -> Vec<Activity> {
    SEED.iter()
        .map(
            |&(id, day, time, kind, title, location, description)| Activity {
                id: id.to_string(),
                time: time.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                day,
                completed: false,
                kind,
            },
        )
        .collect()
}

/// Display labels for one itinerary day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayInfo {
    pub day: u8,
    /// "Hari N"
    pub name: String,
    /// "18 Agustus"
    pub date: String,
    /// "Senin, 18 Agustus 2025"
    pub long_date: String,
}

impl DayInfo {
    pub fn for_day(day: u8) -> Self {
        Self {
            day,
            name: day_name(day),
            date: short_day_date(day),
            long_date: long_day_date(day),
        }
    }
}

/// Labels for every day, in order.
pub fn days() -> Vec<DayInfo> {
    (1..=DAY_COUNT).map(DayInfo::for_day).collect()
}
