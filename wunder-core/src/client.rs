use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::date;
use crate::error::Result;
use crate::feature::{Feature, FeatureSet};

/// Location used when neither the call nor the configuration supplies one.
pub const DEFAULT_LOCATION: &str = "CA/San_Francisco";

/// Production endpoint of the service.
pub const DEFAULT_API_BASE: &str = "https://api.wunderground.com/api/";

/// Language code for response localization.
pub const DEFAULT_LANGUAGE: &str = "EN";

/// Client for the Weather Underground JSON API.
///
/// Holds credentials and request options, builds per-call request URLs of
/// the form `<base>/<feature(s)>/q/<location>.json`, and returns the decoded
/// response body without schema validation. Requests are issued one at a
/// time and never retried; the response status is not inspected, so a
/// non-2xx reply only surfaces if its body fails JSON decoding.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    default_location: String,
    api_base: String,
    language: String,
    best_forecast: bool,
    // derived from the fields above, rebuilt by every setter
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client with the stock options: `CA/San_Francisco` as the
    /// default location, English responses, best-forecast enabled.
    pub fn new(api_key: impl Into<String>) -> Self {
        let mut client = Self {
            api_key: api_key.into(),
            default_location: DEFAULT_LOCATION.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            best_forecast: true,
            base_url: String::new(),
            http: reqwest::Client::new(),
        };
        client.rebuild_base_url();
        client
    }

    /// Create a client from an on-disk configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut client = Self::new(config.api_key.clone());
        client.default_location = config.default_location.clone();
        client.api_base = config.api_base.clone();
        client.language = config.language.clone();
        client.best_forecast = config.best_forecast;
        client.rebuild_base_url();
        client
    }

    /// `<api_base><api_key>/lang:<language>[/bestfct:0]`, kept in sync with
    /// the fields it derives from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
        self.rebuild_base_url();
    }

    pub fn set_api_base(&mut self, api_base: impl Into<String>) {
        self.api_base = api_base.into();
        self.rebuild_base_url();
    }

    /// See <https://www.wunderground.com/weather/api/d/docs?d=language-support>
    /// for the supported language codes.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        self.rebuild_base_url();
    }

    /// Toggle the service's premium forecast blend; disabling it appends
    /// `/bestfct:0` to every request.
    pub fn set_best_forecast(&mut self, enabled: bool) {
        self.best_forecast = enabled;
        self.rebuild_base_url();
    }

    pub fn set_default_location(&mut self, location: impl Into<String>) {
        self.default_location = location.into();
    }

    fn rebuild_base_url(&mut self) {
        let bestfct = if self.best_forecast { "" } else { "/bestfct:0" };
        self.base_url =
            format!("{}{}/lang:{}{}", self.api_base, self.api_key, self.language, bestfct);
    }

    /// Request URL for a feature set and location:
    /// `<base_url>/<feature(s)>/q/<location>.json`.
    ///
    /// The location string is the service's own path syntax (region/city,
    /// postal code, or "lat,lon") and is passed through verbatim.
    pub fn request_url(&self, features: &FeatureSet, location: Option<&str>) -> Result<String> {
        let location = location.unwrap_or(&self.default_location);
        Ok(format!("{}/{}/q/{}.json", self.base_url, features.segment()?, location))
    }

    /// Issue one GET for the given feature set and return the decoded JSON
    /// body as-is. Transport and decode failures propagate untranslated.
    pub async fn call_api(&self, features: &FeatureSet, location: Option<&str>) -> Result<Value> {
        let url = self.request_url(features, location)?;
        debug!(%url, "calling weather API");
        let body = self.http.get(&url).send().await?.json().await?;
        Ok(body)
    }

    /// Current observation for the location.
    pub async fn conditions(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Conditions), location).await
    }

    /// Historical conditions for one date; defaults to today, evaluated at
    /// call time (midnight up to the current observation).
    pub async fn history(&self, location: Option<&str>, date: Option<NaiveDate>) -> Result<Value> {
        let date = date.unwrap_or_else(date::today);
        self.call_api(&FeatureSet::Single(Feature::History(date)), location).await
    }

    /// Historical conditions for every day of an inclusive range, oldest
    /// first. Effectively an automated way to make multiple [`Client::history`]
    /// calls; each entry of the result matches one `history` response.
    ///
    /// Bounds are `YYYYMMDD` strings defaulting to yesterday and today, each
    /// evaluated at call time. Days are fetched strictly in sequence and the
    /// first failure aborts the whole batch. A range whose end precedes its
    /// start yields no requests and an empty result.
    pub async fn history_date_range(
        &self,
        location: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<Value>> {
        let start = match start_date {
            Some(s) => date::parse_yyyymmdd(s)?,
            None => date::yesterday(),
        };
        let end = match end_date {
            Some(s) => date::parse_yyyymmdd(s)?,
            None => date::today(),
        };

        let mut results = Vec::new();
        for day in date::days_inclusive(start, end) {
            results.push(self.history(location, Some(day)).await?);
        }
        Ok(results)
    }

    /// Hourly forecast for the next 36 hours.
    pub async fn hourly_forecast_36h(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Hourly), location).await
    }

    /// Hourly forecast for the next 10 days.
    pub async fn hourly_forecast_10d(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Hourly10Day), location).await
    }

    /// Daily forecast for the next 3 days.
    pub async fn forecast_3d(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Forecast), location).await
    }

    /// Daily forecast for the next 10 days.
    pub async fn forecast_10d(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Forecast10Day), location).await
    }

    /// Geographical information for the location: city / state, postal code,
    /// coordinates, nearby stations.
    pub async fn geolookup(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Geolookup), location).await
    }

    /// Active alerts and special notices.
    pub async fn alerts(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Alerts), location).await
    }

    /// Historical record high and low temperatures.
    pub async fn almanac(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Almanac), location).await
    }

    /// Astronomy information: moon cycle, sunrise / sunset times.
    pub async fn astronomy(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Astronomy), location).await
    }

    /// "Travel planner": historical averages for a month-day span. Start and
    /// end must not be more than 30 days apart and carry no year component;
    /// the service enforces this, not the client.
    pub async fn planner(
        &self,
        location: Option<&str>,
        start_mmdd: &str,
        end_mmdd: &str,
    ) -> Result<Value> {
        let feature = Feature::Planner {
            start_mmdd: start_mmdd.to_string(),
            end_mmdd: end_mmdd.to_string(),
        };
        self.call_api(&FeatureSet::Single(feature), location).await
    }

    /// Tidal info such as maximum and minimum heights.
    pub async fn tidal(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Tide), location).await
    }

    /// "Raw" tidal info, streamlined for graphing purposes.
    pub async fn raw_tidal(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::RawTide), location).await
    }

    /// URLs and metadata for webcams near the location.
    pub async fn webcams(&self, location: Option<&str>) -> Result<Value> {
        self.call_api(&FeatureSet::Single(Feature::Webcams), location).await
    }
}
