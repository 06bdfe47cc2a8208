use std::fmt;

use crate::error::{Error, Result};
use crate::key::SecretKey;
use crate::secrets;

const REDACTED: &str = "********";

/// One value per key. `Debug` and `Display` never print secret values.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretsTable {
    wifi_ssid: String,
    wifi_pass: String,
    owm_api_key: String,
    owm_city: String,
}

impl SecretsTable {
    pub fn new(
        wifi_ssid: impl Into<String>,
        wifi_pass: impl Into<String>,
        owm_api_key: impl Into<String>,
        owm_city: impl Into<String>,
    ) -> Self {
        Self {
            wifi_ssid: wifi_ssid.into(),
            wifi_pass: wifi_pass.into(),
            owm_api_key: owm_api_key.into(),
            owm_city: owm_city.into(),
        }
    }

    /// The values `config.example.h` ships with.
    pub fn template() -> Self {
        Self::new(
            SecretKey::WifiSsid.template_default(),
            SecretKey::WifiPass.template_default(),
            SecretKey::OwmApiKey.template_default(),
            SecretKey::OwmCity.template_default(),
        )
    }

    /// The values baked into this build from `src/secrets.rs`.
    pub fn compiled() -> Self {
        Self::new(
            secrets::WIFI_SSID,
            secrets::WIFI_PASS,
            secrets::OWM_API_KEY,
            secrets::OWM_CITY,
        )
    }

    pub fn get(&self, key: SecretKey) -> &str {
        match key {
            SecretKey::WifiSsid => &self.wifi_ssid,
            SecretKey::WifiPass => &self.wifi_pass,
            SecretKey::OwmApiKey => &self.owm_api_key,
            SecretKey::OwmCity => &self.owm_city,
        }
    }

    pub fn set(&mut self, key: SecretKey, value: impl Into<String>) {
        let slot = match key {
            SecretKey::WifiSsid => &mut self.wifi_ssid,
            SecretKey::WifiPass => &mut self.wifi_pass,
            SecretKey::OwmApiKey => &mut self.owm_api_key,
            SecretKey::OwmCity => &mut self.owm_city,
        };
        *slot = value.into();
    }

    /// Resolve a symbol the way the consuming build would.
    pub fn lookup(&self, name: &str) -> Result<&str> {
        let key = name
            .parse::<SecretKey>()
            .map_err(|_| Error::MissingDefinition {
                name: name.to_string(),
            })?;
        Ok(self.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SecretKey, &str)> + '_ {
        SecretKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Value safe to print: secrets are masked unless they are empty.
    pub fn redacted(&self, key: SecretKey) -> &str {
        let value = self.get(key);
        if key.is_secret() && !value.is_empty() {
            REDACTED
        } else {
            value
        }
    }
}

impl Default for SecretsTable {
    fn default() -> Self {
        Self::template()
    }
}

impl fmt::Debug for SecretsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for key in SecretKey::ALL {
            map.entry(&key.name(), &self.redacted(key));
        }
        map.finish()
    }
}

impl fmt::Display for SecretsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in SecretKey::ALL {
            writeln!(f, "{:<12} {:?}", key.name(), self.redacted(key))?;
        }
        Ok(())
    }
}
