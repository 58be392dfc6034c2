//! Template format version checking

use crate::error::LoadError;
use semver::Version;

/// Template format versions this build understands
pub const SUPPORTED_VERSIONS: &[&str] = &["0.1", "1.0"];

/// Parse a version string, accepting a leading `v` and missing minor/patch parts
pub fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);

    let parts = cleaned.split('.').count();
    let padded = match parts {
        1 => format!("{}.0.0", cleaned),
        2 => format!("{}.0", cleaned),
        _ => cleaned.to_string(),
    };
    Version::parse(&padded).ok()
}

/// Ensure a template declares a supported format version
pub fn validate_version(version_str: &str) -> Result<(), LoadError> {
    let supported = parse_version(version_str).is_some_and(|version| {
        SUPPORTED_VERSIONS
            .iter()
            .filter_map(|s| parse_version(s))
            .any(|s| s == version)
    });

    if supported {
        Ok(())
    } else {
        Err(LoadError::UnsupportedVersion {
            found: version_str.to_string(),
            supported: SUPPORTED_VERSIONS.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions() {
        assert!(validate_version("1.0").is_ok());
        assert!(validate_version("0.1").is_ok());
        assert!(validate_version("v1.0.0").is_ok());
    }

    #[test]
    fn test_unsupported_versions() {
        let err = validate_version("2.0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Template version not supported: 2.0. Supported versions: 0.1, 1.0"
        );
        assert!(validate_version("latest").is_err());
        assert!(validate_version("1.1").is_err());
    }

    #[test]
    fn test_parse_version_pads_components() {
        assert_eq!(parse_version("1"), Some(Version::new(1, 0, 0)));
        assert_eq!(parse_version("0.1"), Some(Version::new(0, 1, 0)));
        assert_eq!(parse_version("abc"), None);
    }
}
