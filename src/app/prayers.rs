use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use crate::app::error::FetchError;

/// Date format the Aladhan API expects in the `date` query parameter.
pub const API_DATE_FORMAT: &str = "%d-%m-%Y";

/// The five daily prayers, in the order they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Key used in the API's `timings` object.
    pub fn api_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Indonesian name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Prayer::Fajr => "Subuh",
            Prayer::Dhuhr => "Dzuhur",
            Prayer::Asr => "Ashar",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isya",
        }
    }
}

/// A validated query: which place, which day, which calculation convention.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerTimesRequest {
    pub city: String,
    pub country: String,
    pub date_offset_days: i64,
    pub method: u8,
}

impl PrayerTimesRequest {
    pub fn new(
        city: &str,
        country: &str,
        date_offset_days: i64,
        method: u8,
    ) -> Result<Self, FetchError> {
        let city = city.trim();
        let country = country.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyField("city"));
        }
        if country.is_empty() {
            return Err(FetchError::EmptyField("country"));
        }
        Ok(Self {
            city: city.to_string(),
            country: country.to_string(),
            date_offset_days,
            method,
        })
    }

    pub fn target_date(&self, today: NaiveDate) -> Result<NaiveDate, FetchError> {
        Duration::try_days(self.date_offset_days)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or(FetchError::DateOutOfRange(self.date_offset_days))
    }

    /// Target date rendered as `DD-MM-YYYY`.
    pub fn formatted_date(&self, today: NaiveDate) -> Result<String, FetchError> {
        Ok(self.target_date(today)?.format(API_DATE_FORMAT).to_string())
    }
}

// Wire format of GET /v1/timingsByCity. On failure `data` is a plain string,
// so the envelope keeps it untyped until `code` has been checked. `code` stays
// untyped too: anything but the number 200 is an API failure.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// The `data` payload of a successful response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PrayerDay {
    pub timings: Timings,
    pub date: DateInfo,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Timings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise", default)]
    pub sunrise: Option<String>,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

impl Timings {
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DateInfo {
    /// e.g. "09 Dec 2025"
    pub readable: String,
    pub hijri: HijriDate,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HijriDate {
    pub day: String,
    pub month: HijriMonth,
    pub year: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HijriMonth {
    pub en: String,
}

impl HijriDate {
    pub fn display(&self) -> String {
        format!("{} {} {} H", self.day, self.month.en, self.year)
    }
}
