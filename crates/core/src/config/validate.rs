use super::{types::Config, ConfigError, SourceKind};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Source timeout is not 0
/// - HTTP sources have an http(s) URL, file sources have a path
///
/// Board selectors are checked by serde when parsing.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Source validation
    let source = &config.source;
    if source.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "source.timeout_secs cannot be 0".to_string(),
        ));
    }

    match source.kind {
        SourceKind::Http => {
            let url = source.url.as_deref().unwrap_or_default();
            if url.is_empty() {
                return Err(ConfigError::ValidationError(
                    "source.url is required when source.kind = \"http\"".to_string(),
                ));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "source.url must start with http:// or https://, got {}",
                    url
                )));
            }
        }
        SourceKind::File => {
            if source.path.is_none() {
                return Err(ConfigError::ValidationError(
                    "source.path is required when source.kind = \"file\"".to_string(),
                ));
            }
        }
    }

    Ok(())
}
