use std::fmt::Write as _;

use crate::table::SecretsTable;

/// Render `table` as the `src/secrets.rs` module `build.rs` expects.
pub fn render(table: &SecretsTable) -> String {
    let mut out = String::from("// Generated by `dualmon-secrets export-rust`. Do not commit.\n");
    let mut section = None;

    for (key, value) in table.iter() {
        if section != Some(key.section()) {
            section = Some(key.section());
            let _ = write!(out, "\n// {}\n", key.section().heading());
        }
        let _ = writeln!(out, "pub const {}: &str = {:?};", key.name(), value);
    }
    out
}
