use chrono::NaiveDate;

use crate::date;
use crate::error::{Error, Result};

/// A named data collection exposed by the weather service.
///
/// Each variant maps to one URL path segment; `History` and `Planner` carry
/// the date parameters the service embeds directly in the segment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    /// Current observation.
    Conditions,
    /// Historical conditions for one calendar date.
    History(NaiveDate),
    /// Hourly forecast for the next 36 hours.
    Hourly,
    /// Hourly forecast for the next 10 days.
    Hourly10Day,
    /// Daily forecast for the next 3 days.
    Forecast,
    /// Daily forecast for the next 10 days.
    Forecast10Day,
    /// City, state, coordinates, and nearby stations for a location.
    Geolookup,
    /// Active alerts and special notices.
    Alerts,
    /// Record high and low temperatures.
    Almanac,
    /// Moon cycle and sunrise / sunset times.
    Astronomy,
    /// Historical averages for a month-day span. The service caps the span
    /// at 30 days and accepts no year component; bounds are passed through
    /// unvalidated.
    Planner { start_mmdd: String, end_mmdd: String },
    /// Tide extremes.
    Tide,
    /// Raw tide series, streamlined for graphing.
    RawTide,
    /// Webcams near a location.
    Webcams,
}

impl Feature {
    /// URL path segment for this feature.
    pub fn segment(&self) -> String {
        match self {
            Feature::Conditions => "conditions".to_string(),
            Feature::History(d) => format!("history_{}", date::format_yyyymmdd(*d)),
            Feature::Hourly => "hourly".to_string(),
            Feature::Hourly10Day => "hourly10day".to_string(),
            Feature::Forecast => "forecast".to_string(),
            Feature::Forecast10Day => "forecast10day".to_string(),
            Feature::Geolookup => "geolookup".to_string(),
            Feature::Alerts => "alerts".to_string(),
            Feature::Almanac => "almanac".to_string(),
            Feature::Astronomy => "astronomy".to_string(),
            Feature::Planner { start_mmdd, end_mmdd } => {
                format!("planner_{start_mmdd}{end_mmdd}")
            }
            Feature::Tide => "tide".to_string(),
            Feature::RawTide => "rawtide".to_string(),
            Feature::Webcams => "webcams".to_string(),
        }
    }
}

/// One or more features for a single request.
///
/// The service supports collecting several features in one call by chaining
/// their segments in the URL, like `/hourly/conditions/...`; segments are
/// resolved positionally, so chained order is preserved exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureSet {
    Single(Feature),
    Chained(Vec<Feature>),
}

impl FeatureSet {
    /// Joined URL path segment(s), in caller-supplied order.
    pub fn segment(&self) -> Result<String> {
        match self {
            FeatureSet::Single(feature) => Ok(feature.segment()),
            FeatureSet::Chained(features) if features.is_empty() => Err(Error::InvalidArgument(
                "chained feature set must contain at least one feature".to_string(),
            )),
            FeatureSet::Chained(features) => {
                let segments: Vec<String> = features.iter().map(Feature::segment).collect();
                Ok(segments.join("/"))
            }
        }
    }
}

impl From<Feature> for FeatureSet {
    fn from(feature: Feature) -> Self {
        FeatureSet::Single(feature)
    }
}

impl From<Vec<Feature>> for FeatureSet {
    fn from(features: Vec<Feature>) -> Self {
        FeatureSet::Chained(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_match_service_names() {
        assert_eq!(Feature::Conditions.segment(), "conditions");
        assert_eq!(Feature::Hourly.segment(), "hourly");
        assert_eq!(Feature::Hourly10Day.segment(), "hourly10day");
        assert_eq!(Feature::Forecast.segment(), "forecast");
        assert_eq!(Feature::Forecast10Day.segment(), "forecast10day");
        assert_eq!(Feature::Tide.segment(), "tide");
        assert_eq!(Feature::RawTide.segment(), "rawtide");
    }

    #[test]
    fn history_segment_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        assert_eq!(Feature::History(date).segment(), "history_20200115");
    }

    #[test]
    fn planner_segment_concatenates_bounds() {
        let feature = Feature::Planner { start_mmdd: "0501".into(), end_mmdd: "0531".into() };
        assert_eq!(feature.segment(), "planner_05010531");
    }

    #[test]
    fn chained_segment_preserves_order() {
        let set = FeatureSet::Chained(vec![Feature::Astronomy, Feature::Conditions]);
        assert_eq!(set.segment().expect("non-empty chain must join"), "astronomy/conditions");
    }

    #[test]
    fn empty_chain_is_invalid() {
        let err = FeatureSet::Chained(Vec::new()).segment().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn conversions_pick_the_matching_constructor() {
        assert_eq!(FeatureSet::from(Feature::Alerts), FeatureSet::Single(Feature::Alerts));
        assert_eq!(
            FeatureSet::from(vec![Feature::Alerts]),
            FeatureSet::Chained(vec![Feature::Alerts])
        );
    }
}
