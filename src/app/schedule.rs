use crate::app::{
    error::FetchError,
    prayers::{Prayer, PrayerDay, Timings},
};

const RULE_WIDTH: usize = 40;
const COLUMN_WIDTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub time: String,
}

/// One row per prayer in `Prayer::ALL` order, whatever else the payload holds.
pub fn display_rows(timings: &Timings) -> Vec<DisplayRow> {
    Prayer::ALL
        .iter()
        .map(|&prayer| DisplayRow {
            label: prayer.label(),
            time: timings.get(prayer).to_string(),
        })
        .collect()
}

/// Capitalises the first letter of every word and lowercases the rest,
/// treating any non-alphabetic character as a word boundary.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}

fn table_line(left: &str, right: &str) -> String {
    format!("| {left:<w$} | {right:<w$} |\n", w = COLUMN_WIDTH)
}

pub fn render_table(rows: &[DisplayRow]) -> String {
    let mut out = table_line("Waktu Sholat", "Jam");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for row in rows {
        out.push_str(&table_line(row.label, &row.time));
    }
    out
}

/// Full schedule block: header with place and date, then the table.
pub fn render(day: &PrayerDay, city: &str, country: &str, show_hijri: bool) -> String {
    let rule = format!("{}\n", "=".repeat(RULE_WIDTH));
    let mut out = format!(
        "\n{rule}📅 JADWAL SHOLAT: {}, {}\n   Tanggal: {}\n",
        title_case(city.trim()),
        title_case(country.trim()),
        day.date.readable
    );
    if show_hijri {
        out.push_str(&format!("   Hijriah: {}\n", day.date.hijri.display()));
    }
    out.push_str(&rule);
    out.push_str(&render_table(&display_rows(&day.timings)));
    out.push_str(&rule);
    out
}

pub fn failure_notice(err: &FetchError) -> String {
    match err {
        FetchError::ApiError(status) => format!("🚨 Gagal: {status}"),
        FetchError::EmptyField(_) => "Kota/Negara tidak boleh kosong.".to_string(),
        FetchError::DateOutOfRange(_) => format!("🚨 Gagal: {err}"),
        FetchError::Timeout
        | FetchError::Network(_)
        | FetchError::HttpError(_)
        | FetchError::ParseError(_) => format!("❌ Terjadi kesalahan koneksi: {err}"),
    }
}
