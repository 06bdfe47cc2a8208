use std::fmt;

use log::debug;

use crate::key::SecretKey;
use crate::table::SecretsTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// Value is still the template's placeholder text.
    Placeholder { key: SecretKey },
    /// Value is empty or only whitespace and the key needs one.
    Empty { key: SecretKey },
}

impl Finding {
    pub fn key(&self) -> SecretKey {
        match *self {
            Finding::Placeholder { key } | Finding::Empty { key } => key,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Finding::Placeholder { key } => write!(
                f,
                "{key} still holds the placeholder {:?}",
                key.placeholder().unwrap_or_default()
            ),
            Finding::Empty { key } => write!(f, "{key} is empty"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    findings: Vec<Finding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

impl<'a> IntoIterator for &'a LintReport {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        Ok(())
    }
}

pub fn check(table: &SecretsTable) -> LintReport {
    let mut findings = Vec::new();

    for (key, value) in table.iter() {
        if value.trim().is_empty() {
            if !key.allows_empty() {
                findings.push(Finding::Empty { key });
            }
            continue;
        }
        if key.is_placeholder(value) {
            findings.push(Finding::Placeholder { key });
        }
    }

    debug!("lint finished with {} finding(s)", findings.len());
    LintReport { findings }
}
