use crate::config::types::{Config, FetchConfig, OutputConfig};
use crate::ConfigError;

/// Longest timeout accepted, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Excel's limit on worksheet name length
const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel refuses in worksheet names
const SHEET_NAME_FORBIDDEN: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    validate_file_name("csv-file", &config.csv_file)?;
    validate_file_name("xlsx-file", &config.xlsx_file)?;

    if config.csv_file == config.xlsx_file {
        return Err(ConfigError::Validation(format!(
            "csv-file and xlsx-file must differ, both are '{}'",
            config.csv_file
        )));
    }

    validate_sheet_name(&config.sheet_name)?;

    Ok(())
}

/// Output files are bare names; the directory comes from `output.directory`
fn validate_file_name(key: &str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ConfigError::Validation(format!(
            "{} must be a plain file name, got '{}'",
            key, name
        )));
    }

    Ok(())
}

fn validate_sheet_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "sheet-name cannot be empty".to_string(),
        ));
    }

    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ConfigError::Validation(format!(
            "sheet-name must be at most {} characters, got '{}'",
            MAX_SHEET_NAME_LEN, name
        )));
    }

    if name.contains(SHEET_NAME_FORBIDDEN) {
        return Err(ConfigError::Validation(format!(
            "sheet-name '{}' contains one of []:*?/\\",
            name
        )));
    }

    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(ConfigError::Validation(format!(
            "sheet-name '{}' cannot start or end with an apostrophe",
            name
        )));
    }

    Ok(())
}
