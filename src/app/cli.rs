use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, warn};

use crate::app::{
    client::PrayerClient,
    config::Config,
    console::Console,
    prayers::PrayerTimesRequest,
    schedule::{failure_notice, title_case},
};

/// Jadwal sholat harian dari api.aladhan.com
#[derive(Parser, Debug, Default)]
#[command(name = "jadwal-sholat", version, about)]
pub struct Args {
    /// City to look up; prompted for when omitted
    #[arg(long)]
    pub city: Option<String>,

    /// Country to look up; prompted for when omitted
    #[arg(long)]
    pub country: Option<String>,

    /// Also show tomorrow's schedule
    #[arg(long)]
    pub tomorrow: bool,

    /// Show the Hijri date under the Gregorian one
    #[arg(long)]
    pub hijri: bool,

    /// TOML file overriding api_url, method and timeout_secs
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Prompt, fetch, render. Fetch failures are reported on the console and
/// never escape; only console I/O errors do.
pub async fn run<R: BufRead, W: Write>(
    args: &Args,
    config: &Config,
    client: &PrayerClient,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> io::Result<()> {
    console.line("🕌 Aplikasi Jadwal Sholat Sederhana")?;

    let city = match &args.city {
        Some(city) => city.clone(),
        None => console.prompt("Masukkan Kota: ")?,
    };
    let country = match &args.country {
        Some(country) => country.clone(),
        None => console.prompt("Masukkan Negara: ")?,
    };

    let offsets: &[i64] = if args.tomorrow { &[0, 1] } else { &[0] };
    for &offset in offsets {
        let request = match PrayerTimesRequest::new(&city, &country, offset, config.method) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected input: {}", e);
                return console.notice(&failure_notice(&e));
            }
        };

        let result = match request.formatted_date(today) {
            Ok(date) => {
                console.line(&format!(
                    "⏳ Mengambil data untuk {} tanggal {}...",
                    title_case(&request.city),
                    date
                ))?;
                client.fetch(&request, today).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            info!("No schedule for offset {}: {}", offset, e);
        }
        console.show_schedule(&result, &request.city, &request.country, args.hijri)?;
    }

    Ok(())
}
