//! Reading and writing the `config.h` header the firmware includes.
//!
//! The accepted syntax is the subset the template uses: `#define NAME "value"`
//! lines, `//` comments and blank lines. Other preprocessor directives (include
//! guards, `#pragma once`) are skipped.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::key::SecretKey;
use crate::table::SecretsTable;

const BANNER: &str = "\
// ========== SECRETS TEMPLATE ==========
// Copy this file to config.h and edit it for your environment:
// cp config.example.h config.h
";

pub fn parse(text: &str) -> Result<SecretsTable> {
    let mut defined: BTreeMap<SecretKey, String> = BTreeMap::new();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let Some(rest) = line.strip_prefix("#define") else {
            if line.starts_with('#') {
                debug!("line {line_no}: skipping directive `{line}`");
                continue;
            }
            return Err(Error::Malformed {
                line: line_no,
                reason: format!("expected `#define NAME \"value\"`, found `{line}`"),
            });
        };

        if !rest.starts_with(char::is_whitespace) {
            return Err(Error::Malformed {
                line: line_no,
                reason: "expected whitespace after `#define`".to_string(),
            });
        }

        let rest = rest.trim_start();
        let name_end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        let (name, value_part) = rest.split_at(name_end);
        if name.is_empty() {
            return Err(Error::Malformed {
                line: line_no,
                reason: "missing symbol name after `#define`".to_string(),
            });
        }

        let Ok(key) = name.parse::<SecretKey>() else {
            warn!("line {line_no}: ignoring unknown definition `{name}`");
            continue;
        };

        let value = parse_literal(value_part.trim_start(), line_no)?;

        if defined.contains_key(&key) {
            return Err(Error::DuplicateDefinition {
                name: key.name(),
                line: line_no,
            });
        }
        debug!("line {line_no}: {key} defined");
        defined.insert(key, value);
    }

    let mut table = SecretsTable::template();
    for key in SecretKey::ALL {
        let value = defined.remove(&key).ok_or_else(|| Error::MissingDefinition {
            name: key.name().to_string(),
        })?;
        table.set(key, value);
    }
    Ok(table)
}

/// Parse `"..."` plus an optional trailing `//` comment.
fn parse_literal(input: &str, line: usize) -> Result<String> {
    let Some(body) = input.strip_prefix('"') else {
        return Err(Error::Malformed {
            line,
            reason: "expected a string literal".to_string(),
        });
    };

    let mut value = String::with_capacity(body.len());
    let mut chars = body.char_indices();
    let mut closing = None;

    while let Some((pos, c)) = chars.next() {
        match c {
            '"' => {
                closing = Some(pos);
                break;
            }
            '\\' => {
                let escaped = match chars.next() {
                    Some((_, '"')) => '"',
                    Some((_, '\\')) => '\\',
                    Some((_, 'n')) => '\n',
                    Some((_, 't')) => '\t',
                    Some((_, 'r')) => '\r',
                    Some((_, other)) => {
                        return Err(Error::InvalidEscape {
                            line,
                            escape: other,
                        })
                    }
                    None => return Err(Error::UnterminatedString { line }),
                };
                value.push(escaped);
            }
            other => value.push(other),
        }
    }

    let closing = closing.ok_or(Error::UnterminatedString { line })?;
    let trailing = body[closing + 1..].trim();
    if !trailing.is_empty() && !trailing.starts_with("//") {
        return Err(Error::Malformed {
            line,
            reason: format!("unexpected text after string literal: `{trailing}`"),
        });
    }

    Ok(value)
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Canonical header text for `table`.
pub fn render(table: &SecretsTable) -> String {
    let mut out = String::from(BANNER);
    let mut section = None;

    for (key, value) in table.iter() {
        if section != Some(key.section()) {
            section = Some(key.section());
            let _ = write!(out, "\n// {}\n", key.section().heading());
        }
        let _ = writeln!(out, "#define {} \"{}\"", key.name(), escape(value));
    }
    out
}

pub fn load(path: impl AsRef<Path>) -> Result<SecretsTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    debug!("parsing {}", path.display());
    parse(&text)
}

pub fn save(path: impl AsRef<Path>, table: &SecretsTable) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render(table)).map_err(|source| Error::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../config.example.h");

    #[test]
    fn shipped_template_parses_to_template_table() {
        assert_eq!(parse(SHIPPED).unwrap(), SecretsTable::template());
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let text = format!("\u{feff}{SHIPPED}");
        assert_eq!(parse(&text).unwrap(), SecretsTable::template());
    }

    #[test]
    fn rendering_the_template_reproduces_the_shipped_file() {
        assert_eq!(render(&SecretsTable::template()), SHIPPED);
    }

    #[test]
    fn render_then_parse_keeps_awkward_values() {
        let table = SecretsTable::new("cafe \"guest\"", "back\\slash\tpass", "k\ney", "Jeju-si");
        assert_eq!(parse(&render(&table)).unwrap(), table);
    }

    #[test]
    fn rendered_header_lists_keys_in_order_under_sections() {
        let text = render(&SecretsTable::template());
        let wifi = text.find("// WiFi").unwrap();
        let ssid = text.find("#define WIFI_SSID \"YOUR_WIFI_NAME\"").unwrap();
        let owm = text.find("// OpenWeatherMap").unwrap();
        let city = text.find("#define OWM_CITY \"Seoul\"").unwrap();
        assert!(wifi < ssid && ssid < owm && owm < city);
    }

    #[test]
    fn guards_trailing_comments_and_unknown_defines_are_tolerated() {
        let text = r#"
#ifndef CONFIG_H
#define CONFIG_H
#define WIFI_SSID "lab"   // 2.4 GHz only
#define WIFI_PASS ""
#define OWM_API_KEY "abc123"
#define OWM_CITY "Busan"
#define OWM_UNITS "metric"
#endif
"#;
        let table = parse(text).unwrap();
        assert_eq!(table.get(SecretKey::WifiSsid), "lab");
        assert_eq!(table.get(SecretKey::WifiPass), "");
        assert_eq!(table.get(SecretKey::OwmCity), "Busan");
    }

    #[test]
    fn missing_symbol_is_reported_by_name() {
        let text = "#define WIFI_SSID \"a\"\n#define WIFI_PASS \"b\"\n#define OWM_CITY \"c\"\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, Error::MissingDefinition { ref name } if name == "OWM_API_KEY"));
    }

    #[test]
    fn empty_file_misses_the_first_key() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, Error::MissingDefinition { ref name } if name == "WIFI_SSID"));
    }

    #[test]
    fn second_definition_is_rejected() {
        let text = format!("{SHIPPED}#define OWM_CITY \"Busan\"\n");
        let err = parse(&text).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateDefinition { name: "OWM_CITY", line: 12 }
        ));
    }

    #[test]
    fn literal_errors_carry_line_numbers() {
        let unterminated = parse("// x\n#define WIFI_SSID \"open").unwrap_err();
        assert!(matches!(unterminated, Error::UnterminatedString { line: 2 }));

        let bad_escape = parse("#define WIFI_SSID \"a\\qb\"").unwrap_err();
        assert!(matches!(bad_escape, Error::InvalidEscape { line: 1, escape: 'q' }));

        let bare = parse("#define WIFI_SSID home").unwrap_err();
        assert!(matches!(bare, Error::Malformed { line: 1, .. }));

        let trailing = parse("#define WIFI_SSID \"a\" b").unwrap_err();
        assert!(matches!(trailing, Error::Malformed { line: 1, .. }));
    }

    #[test]
    fn stray_text_is_malformed() {
        let err = parse("WIFI_SSID = \"home\"").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 1, .. }));
    }

    #[test]
    fn save_and_load_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.h");
        let table = SecretsTable::new("home", "pw", "key", "Daegu");
        save(&path, &table).unwrap();
        assert_eq!(load(&path).unwrap(), table);
    }

    #[test]
    fn load_reports_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.h");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, Error::Io { path: ref p, .. } if p == &path));
    }
}
