// Fallback secrets used when src/secrets.rs is absent in a clean checkout.
// Fill in src/secrets.rs (or run `dualmon-secrets export-rust`) before flashing.

// WiFi
pub const WIFI_SSID: &str = "YOUR_WIFI_NAME";
pub const WIFI_PASS: &str = "YOUR_WIFI_PASSWORD";

// OpenWeatherMap (https://openweathermap.org)
pub const OWM_API_KEY: &str = "YOUR_API_KEY_HERE";
pub const OWM_CITY: &str = "Seoul";
