use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::app::{
    config::Config,
    error::FetchError,
    prayers::{Envelope, PrayerDay, PrayerTimesRequest},
};

/// Talks to the Aladhan `timingsByCity` endpoint. One GET per call, no
/// retries, nothing cached between calls.
#[derive(Debug, Clone)]
pub struct PrayerClient {
    http: reqwest::Client,
    api_url: String,
}

impl PrayerClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// Fetches the schedule for `today + request.date_offset_days`.
    pub async fn fetch(
        &self,
        request: &PrayerTimesRequest,
        today: NaiveDate,
    ) -> Result<PrayerDay, FetchError> {
        let date = request.formatted_date(today)?;
        let method = request.method.to_string();
        info!(
            "Fetching prayer times for {}, {} on {}",
            request.city, request.country, date
        );

        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("city", request.city.as_str()),
                ("country", request.country.as_str()),
                ("method", method.as_str()),
                ("date", date.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", self.api_url, e);
                FetchError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to fetch prayer times: {}", status);
            return Err(FetchError::HttpError(status.as_u16()));
        }

        let body = response.text().await?;
        let day = decode(&body)?;
        debug!("Prayer times fetched successfully: {:?}", day);
        Ok(day)
    }
}

/// Checks the API envelope and pulls out the `data` payload.
pub fn decode(body: &str) -> Result<PrayerDay, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.code.as_ref().and_then(|code| code.as_u64()) != Some(200) {
        let message = match envelope.data.as_str() {
            Some(detail) if !detail.is_empty() => format!("{}: {}", envelope.status, detail),
            _ => envelope.status,
        };
        warn!("API answered with code {:?}: {}", envelope.code, message);
        return Err(FetchError::ApiError(message));
    }
    Ok(serde_json::from_value(envelope.data)?)
}
