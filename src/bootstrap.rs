use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    Created,
    Overwritten,
    AlreadyPresent,
}

/// Copy `template` to `target` unless the user already has an instance.
pub fn instantiate_file(template: &Path, target: &Path, force: bool) -> Result<Bootstrap> {
    if !template.exists() {
        return Err(Error::TemplateMissing {
            path: template.to_path_buf(),
        });
    }

    let existed = target.exists();
    if existed && !force {
        info!("{} already exists, leaving it untouched", target.display());
        return Ok(Bootstrap::AlreadyPresent);
    }

    fs::copy(template, target).map_err(|source| Error::io(target, source))?;

    if existed {
        warn!(
            "Overwrote {} with {}",
            target.display(),
            template.display()
        );
        Ok(Bootstrap::Overwritten)
    } else {
        info!("Bootstrapped {} from {}", target.display(), template.display());
        Ok(Bootstrap::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../config.example.h");

    #[test]
    fn creates_missing_instance() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("config.example.h");
        let target = dir.path().join("config.h");
        fs::write(&template, SHIPPED).unwrap();

        assert_eq!(instantiate_file(&template, &target, false).unwrap(), Bootstrap::Created);
        assert_eq!(fs::read_to_string(&target).unwrap(), SHIPPED);
    }

    #[test]
    fn keeps_existing_instance_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("config.example.h");
        let target = dir.path().join("config.h");
        fs::write(&template, SHIPPED).unwrap();
        fs::write(&target, "edited").unwrap();

        assert_eq!(
            instantiate_file(&template, &target, false).unwrap(),
            Bootstrap::AlreadyPresent
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), "edited");

        assert_eq!(
            instantiate_file(&template, &target, true).unwrap(),
            Bootstrap::Overwritten
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), SHIPPED);
    }

    #[test]
    fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = instantiate_file(
            &dir.path().join("nope.h"),
            &dir.path().join("config.h"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, Error::TemplateMissing { .. }));
    }
}
