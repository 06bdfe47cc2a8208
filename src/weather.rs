//! The "current weather by city name" request the firmware sends.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, Result};
use crate::key::SecretKey;
use crate::table::SecretsTable;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

const MASK: &str = "********";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Units {
    /// Kelvin.
    Standard,
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Units::Standard),
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(Error::UnknownUnits {
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct CurrentWeatherQuery {
    endpoint: Url,
    city: String,
    api_key: String,
    units: Units,
}

impl CurrentWeatherQuery {
    pub fn from_table(table: &SecretsTable) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT)?,
            city: table.get(SecretKey::OwmCity).to_string(),
            api_key: table.get(SecretKey::OwmApiKey).to_string(),
            units: Units::default(),
        })
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn url(&self) -> Url {
        self.build(&self.api_key)
    }

    /// Same request with the API key masked, for logs and terminals.
    pub fn redacted_url(&self) -> Url {
        self.build(MASK)
    }

    fn build(&self, api_key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &self.city)
            .append_pair("appid", api_key)
            .append_pair("units", self.units.as_str());
        url
    }
}

impl fmt::Debug for CurrentWeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentWeatherQuery")
            .field("endpoint", &self.endpoint.as_str())
            .field("city", &self.city)
            .field("api_key", &MASK)
            .field("units", &self.units)
            .finish()
    }
}
