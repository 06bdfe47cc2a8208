//! The closed set of settings the firmware reads from `config.h`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which block of the header a key is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Wifi,
    OpenWeatherMap,
}

impl Section {
    pub fn heading(self) -> &'static str {
        match self {
            Section::Wifi => "WiFi",
            Section::OpenWeatherMap => "OpenWeatherMap (https://openweathermap.org)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecretKey {
    WifiSsid,
    WifiPass,
    OwmApiKey,
    OwmCity,
}

impl SecretKey {
    /// Header order.
    pub const ALL: [SecretKey; 4] = [
        SecretKey::WifiSsid,
        SecretKey::WifiPass,
        SecretKey::OwmApiKey,
        SecretKey::OwmCity,
    ];

    /// Symbol name as it appears after `#define`.
    pub fn name(self) -> &'static str {
        match self {
            SecretKey::WifiSsid => "WIFI_SSID",
            SecretKey::WifiPass => "WIFI_PASS",
            SecretKey::OwmApiKey => "OWM_API_KEY",
            SecretKey::OwmCity => "OWM_CITY",
        }
    }

    /// Text the template ships with that must be replaced before use.
    /// `OWM_CITY` ships with a usable default instead.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            SecretKey::WifiSsid => Some("YOUR_WIFI_NAME"),
            SecretKey::WifiPass => Some("YOUR_WIFI_PASSWORD"),
            SecretKey::OwmApiKey => Some("YOUR_API_KEY_HERE"),
            SecretKey::OwmCity => None,
        }
    }

    /// Placeholder comparison ignores surrounding whitespace.
    pub fn is_placeholder(self, value: &str) -> bool {
        self.placeholder() == Some(value.trim())
    }

    pub fn template_default(self) -> &'static str {
        match self {
            SecretKey::OwmCity => "Seoul",
            other => other.placeholder().unwrap_or_default(),
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, SecretKey::WifiPass | SecretKey::OwmApiKey)
    }

    /// An empty pre-shared key means an open network.
    pub fn allows_empty(self) -> bool {
        matches!(self, SecretKey::WifiPass)
    }

    pub fn section(self) -> Section {
        match self {
            SecretKey::WifiSsid | SecretKey::WifiPass => Section::Wifi,
            SecretKey::OwmApiKey | SecretKey::OwmCity => Section::OpenWeatherMap,
        }
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecretKey {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SecretKey::ALL
            .into_iter()
            .find(|key| key.name() == name)
            .ok_or_else(|| Error::UnknownKey {
                name: name.to_string(),
            })
    }
}
