//! Moving between a filled-in `config.h` and the template it came from.

use std::collections::BTreeMap;

use crate::key::SecretKey;
use crate::table::SecretsTable;

/// User-specific values for the keys that carry a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: BTreeMap<SecretKey, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys without a placeholder are ignored; they are never substituted.
    pub fn bind(&mut self, key: SecretKey, value: impl Into<String>) -> &mut Self {
        if key.placeholder().is_some() {
            self.values.insert(key, value.into());
        }
        self
    }

    pub fn get(&self, key: SecretKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = SecretKey> + '_ {
        self.values.keys().copied()
    }
}

/// Swap every edited value back to its placeholder, remembering the original.
/// A padded placeholder is not an edit; it comes back as the bare placeholder.
pub fn templatize(filled: &SecretsTable) -> (SecretsTable, Bindings) {
    let mut template = filled.clone();
    let mut bindings = Bindings::new();

    for (key, value) in filled.iter() {
        let Some(placeholder) = key.placeholder() else {
            continue;
        };
        if !key.is_placeholder(value) {
            bindings.bind(key, value);
        }
        template.set(key, placeholder);
    }

    (template, bindings)
}

/// Replace placeholders with bound values. Unbound placeholders stay put.
pub fn instantiate(template: &SecretsTable, bindings: &Bindings) -> SecretsTable {
    let mut filled = template.clone();

    for key in SecretKey::ALL {
        if !key.is_placeholder(template.get(key)) {
            continue;
        }
        if let Some(value) = bindings.get(key) {
            filled.set(key, value);
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SecretsTable {
        SecretsTable::new("home-net", "", "f00dcafe", "Busan")
    }

    #[test]
    fn templatize_restores_placeholders_and_keeps_city() {
        let (template, bindings) = templatize(&filled());
        assert_eq!(template.get(SecretKey::WifiSsid), "YOUR_WIFI_NAME");
        assert_eq!(template.get(SecretKey::WifiPass), "YOUR_WIFI_PASSWORD");
        assert_eq!(template.get(SecretKey::OwmApiKey), "YOUR_API_KEY_HERE");
        assert_eq!(template.get(SecretKey::OwmCity), "Busan");
        assert_eq!(bindings.get(SecretKey::WifiPass), Some(""));
        assert_eq!(bindings.get(SecretKey::OwmCity), None);
    }

    #[test]
    fn instantiate_inverts_templatize() {
        let original = filled();
        let (template, bindings) = templatize(&original);
        assert_eq!(instantiate(&template, &bindings), original);
    }

    #[test]
    fn templatize_is_idempotent() {
        let (once, bindings) = templatize(&filled());
        let (twice, none) = templatize(&once);
        assert_eq!(once, twice);
        assert!(none.is_empty());
        assert_eq!(instantiate(&twice, &bindings), filled());
    }

    #[test]
    fn shipped_template_has_nothing_to_capture() {
        let (template, bindings) = templatize(&SecretsTable::template());
        assert_eq!(template, SecretsTable::template());
        assert!(bindings.is_empty());
    }

    #[test]
    fn partially_edited_copy_round_trips() {
        let mut partial = SecretsTable::template();
        partial.set(SecretKey::WifiSsid, "lab");
        let (template, bindings) = templatize(&partial);
        assert_eq!(bindings.keys().collect::<Vec<_>>(), vec![SecretKey::WifiSsid]);
        assert_eq!(instantiate(&template, &bindings), partial);
    }

    #[test]
    fn padded_placeholder_is_not_captured() {
        let mut padded = filled();
        padded.set(SecretKey::OwmApiKey, " YOUR_API_KEY_HERE ");
        let (template, bindings) = templatize(&padded);
        assert_eq!(template.get(SecretKey::OwmApiKey), "YOUR_API_KEY_HERE");
        assert_eq!(bindings.get(SecretKey::OwmApiKey), None);
        assert!(crate::lint::check(&padded)
            .findings()
            .contains(&crate::lint::Finding::Placeholder { key: SecretKey::OwmApiKey }));
    }

    #[test]
    fn instantiate_leaves_edited_values_alone() {
        let mut bindings = Bindings::new();
        bindings.bind(SecretKey::WifiSsid, "other");
        let table = instantiate(&filled(), &bindings);
        assert_eq!(table.get(SecretKey::WifiSsid), "home-net");
    }

    #[test]
    fn city_cannot_be_bound() {
        let mut bindings = Bindings::new();
        bindings.bind(SecretKey::OwmCity, "Busan");
        assert!(bindings.is_empty());
    }
}
