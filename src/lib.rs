//! Wi-Fi and OpenWeatherMap settings for the dual-monitor firmware.
//!
//! The firmware reads four constants from `config.h`, which users create by
//! copying `config.example.h`. This crate knows those keys, parses and renders
//! the header, flags placeholders left unedited, and builds the weather
//! request the firmware derives from the city and API key. The same values are
//! compiled into Rust consumers through [`compiled`].

pub mod bootstrap;
pub mod error;
pub mod header;
pub mod key;
pub mod lint;
pub mod rust_consts;
pub mod table;
pub mod template;
pub mod weather;

// Generated by build.rs from secrets.defaults.rs on a clean checkout.
mod secrets;

/// Values compiled into this build.
pub mod compiled {
    pub use crate::secrets::{OWM_API_KEY, OWM_CITY, WIFI_PASS, WIFI_SSID};
}

pub use error::{Error, Result};
pub use key::{SecretKey, Section};
pub use lint::{Finding, LintReport};
pub use table::SecretsTable;
pub use template::Bindings;
pub use weather::{CurrentWeatherQuery, Units};
