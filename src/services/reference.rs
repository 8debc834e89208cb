// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static reference data: hotels and the uniform schedule.
//!
//! Never mutated at runtime. The entries are placeholder data for the demo
//! group: names, addresses and dress codes are illustrative and no phone
//! numbers are published. Replace the tables with the travel agent's details
//! before handing the app to pilgrims.

use crate::models::{Hotel, HotelType, Uniform};
use crate::time_utils::long_day_date;

/// (id, name, address, phone, dates, location, type)
type HotelEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    HotelType,
);

#[rustfmt::skip]
const HOTELS: &[HotelEntry] = &[
    ("zest-bandara", "Hotel ZEST BANDARA",
        "Jl. Marsekal Suryadarma No. 1, Neglasari, Kota Tangerang, Banten",
        "", "18 - 19 Agustus 2025", "Jakarta", HotelType::Transit),
    ("madinah", "Hotel Madinah",
        "Central Area, dekat Masjid Nabawi, Madinah",
        "", "20 - 23 Agustus 2025", "Madinah", HotelType::Umroh),
    ("makkah", "Hotel Makkah",
        "Ibrahim Al Khalil Street, dekat Masjidil Haram, Makkah",
        "", "23 - 27 Agustus 2025", "Makkah", HotelType::Umroh),
];

/// (date, male, female, description)
type UniformEntry = (&'static str, &'static str, &'static str, &'static str);

#[rustfmt::skip]
const UNIFORMS: &[UniformEntry] = &[
    ("Senin, 18 Agustus 2025",
        "Baju koko putih seragam, celana panjang hitam, peci hitam",
        "Gamis seragam hijau, kerudung krem",
        "Pelepasan dan keberangkatan dari Tasikmalaya"),
    ("Selasa, 19 Agustus 2025",
        "Batik seragam travel, celana panjang hitam",
        "Gamis batik seragam, kerudung hitam",
        "Keberangkatan dari Terminal 3 Soekarno Hatta"),
    ("Sabtu, 23 Agustus 2025",
        "Kain ihram dua helai tanpa jahitan",
        "Gamis putih, kerudung putih, manset",
        "Miqat di Masjid Bir Ali, Umroh pertama"),
    ("Senin, 25 Agustus 2025",
        "Kain ihram dua helai tanpa jahitan",
        "Gamis putih, kerudung putih, manset",
        "City tour Makkah dan Umroh kedua"),
    ("Rabu, 27 Agustus 2025",
        "Batik seragam travel, celana panjang hitam",
        "Gamis batik seragam, kerudung hitam",
        "Kepulangan dari Jeddah"),
];

/// Every hotel, transit first.
pub fn hotels() -> Vec<Hotel> {
    HOTELS
        .iter()
        .map(|&(id, name, address, phone, dates, location, kind)| Hotel {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            dates: dates.to_string(),
            location: location.to_string(),
            kind,
        })
        .collect()
}

pub fn hotels_of_type(kind: HotelType) -> Vec<Hotel> {
    hotels().into_iter().filter(|h| h.kind == kind).collect()
}

/// The uniform schedule, in itinerary order.
pub fn uniforms() -> Vec<Uniform> {
    UNIFORMS
        .iter()
        .map(|&(date, male, female, description)| Uniform {
            date: date.to_string(),
            male: male.to_string(),
            female: female.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Uniform whose date matches the long day-date of `day`.
pub fn uniform_for_day(day: u8) -> Option<Uniform> {
    uniform_for_date(&long_day_date(day))
}

pub fn uniform_for_date(date: &str) -> Option<Uniform> {
    if date.is_empty() {
        return None;
    }
    uniforms().into_iter().find(|u| u.date == date)
}
