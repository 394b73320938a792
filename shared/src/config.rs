use std::env;

pub const DEFAULT_MAX_WIDTH: u32 = 250;
pub const DEFAULT_MAX_HEIGHT: u32 = 250;

const MAX_WIDTH: &str = "MAX_WIDTH";
const MAX_HEIGHT: &str = "MAX_HEIGHT";
const THUMBNAIL_BUCKET: &str = "THUMBNAIL_BUCKET";

/// Process-wide settings, read once at cold start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub destination_bucket: String,
}

impl ProcessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source.
    ///
    /// Dimensions fall back to 250 when absent or not a non-negative integer.
    /// Zero leaves that side unconstrained.
    /// An unset destination bucket stays empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_width = parse_dimension(lookup(MAX_WIDTH), MAX_WIDTH, DEFAULT_MAX_WIDTH);
        let max_height = parse_dimension(lookup(MAX_HEIGHT), MAX_HEIGHT, DEFAULT_MAX_HEIGHT);
        let destination_bucket = lookup(THUMBNAIL_BUCKET).unwrap_or_default();

        if destination_bucket.is_empty() {
            tracing::warn!(
                "{} is not set; thumbnails will be uploaded to an empty bucket name",
                THUMBNAIL_BUCKET
            );
        }

        Self {
            max_width,
            max_height,
            destination_bucket,
        }
    }
}

fn parse_dimension(value: Option<String>, name: &str, default: u32) -> u32 {
    match value.as_deref().map(str::parse::<u32>) {
        Some(Ok(parsed)) => parsed,
        Some(_) => {
            tracing::warn!("Invalid {} value, using default {}", name, default);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ProcessConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProcessConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.max_width, 250);
        assert_eq!(config.max_height, 250);
        assert_eq!(config.destination_bucket, "");
    }

    #[test]
    fn test_reads_all_values() {
        let config = config_from(&[
            ("MAX_WIDTH", "100"),
            ("MAX_HEIGHT", "80"),
            ("THUMBNAIL_BUCKET", "thumbs"),
        ]);
        assert_eq!(
            config,
            ProcessConfig {
                max_width: 100,
                max_height: 80,
                destination_bucket: "thumbs".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_dimensions_fall_back() {
        // Non-numeric
        assert_eq!(config_from(&[("MAX_WIDTH", "wide")]).max_width, 250);
        // Negative
        assert_eq!(config_from(&[("MAX_WIDTH", "-10")]).max_width, 250);
        // Empty
        assert_eq!(config_from(&[("MAX_HEIGHT", "")]).max_height, 250);
    }

    #[test]
    fn test_zero_is_kept_as_unbounded() {
        let config = config_from(&[("MAX_WIDTH", "0"), ("MAX_HEIGHT", "100")]);
        assert_eq!(config.max_width, 0);
        assert_eq!(config.max_height, 100);
    }

    #[test]
    fn test_width_and_height_are_independent() {
        let config = config_from(&[("MAX_WIDTH", "oops"), ("MAX_HEIGHT", "120")]);
        assert_eq!(config.max_width, 250);
        assert_eq!(config.max_height, 120);
    }
}
