pub mod app;

pub use app::{
    client::PrayerClient,
    config::Config,
    error::FetchError,
    prayers::{Prayer, PrayerDay, PrayerTimesRequest},
};
