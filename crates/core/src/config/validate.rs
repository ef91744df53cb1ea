use super::{types::Config, ConfigError, SourceKind};

/// Validate configuration
/// Currently validates:
/// - API source has a base URL
/// - Row step bounds are ordered and the step ratio is in (0, 1]
/// - Tolerance, row limit and rental window are usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.source.kind == SourceKind::Api {
        let has_url = config
            .api
            .as_ref()
            .is_some_and(|api| !api.base_url.trim().is_empty());
        if !has_url {
            return Err(ConfigError::ValidationError(
                "api.base_url must be set when source.kind = \"api\"".to_string(),
            ));
        }
    }

    let rows = &config.rows;
    if !(rows.step_ratio > 0.0 && rows.step_ratio <= 1.0) {
        return Err(ConfigError::ValidationError(
            "rows.step_ratio must be in (0, 1]".to_string(),
        ));
    }
    if rows.min_step_px > rows.max_step_px {
        return Err(ConfigError::ValidationError(
            "rows.min_step_px cannot exceed rows.max_step_px".to_string(),
        ));
    }
    if rows.tolerance_px < 0.0 {
        return Err(ConfigError::ValidationError(
            "rows.tolerance_px cannot be negative".to_string(),
        ));
    }
    if rows.row_limit == 0 {
        return Err(ConfigError::ValidationError(
            "rows.row_limit cannot be 0".to_string(),
        ));
    }

    if config.rental.window_hours == 0 {
        return Err(ConfigError::ValidationError(
            "rental.window_hours cannot be 0".to_string(),
        ));
    }

    Ok(())
}
