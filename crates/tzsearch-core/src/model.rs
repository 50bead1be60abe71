// crates/tzsearch-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A city record as it appears in the source dataset.
///
/// ```json
/// { "city": "Amsterdam", "country": "Netherlands", "tz": "Europe/Amsterdam",
///   "descr": "North Holland", "lat": 52.37, "lng": 4.89 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub city: String,
    pub country: String,
    pub tz: String,
    #[serde(default)]
    pub descr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl City {
    /// Key under which the city is indexed: the lower-cased display name.
    pub fn index_key(&self) -> String {
        self.city.to_lowercase()
    }
}

/// The payload stored in the index for every city and handed back to
/// autocomplete callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub country: String,
    pub tz: String,
    pub descr: String,
}

impl CityRecord {
    /// Display line for a suggestion list: `City, Country (descr)`.
    pub fn label(&self) -> String {
        format!("{}, {} ({})", self.city, self.country, self.descr)
    }
}

impl From<&City> for CityRecord {
    fn from(c: &City) -> Self {
        Self {
            city: c.city.clone(),
            country: c.country.clone(),
            tz: c.tz.clone(),
            descr: c.descr.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_key_is_lowercase() {
        let c = City {
            city: "São Paulo".into(),
            country: "Brazil".into(),
            tz: "America/Sao_Paulo".into(),
            descr: String::new(),
            lat: None,
            lng: None,
        };
        assert_eq!(c.index_key(), "são paulo");
        assert_eq!(CityRecord::from(&c).tz, "America/Sao_Paulo");
        assert_eq!(CityRecord::from(&c).label(), "São Paulo, Brazil ()");
    }
}
