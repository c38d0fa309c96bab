use crate::utils::error::{Result, SmokeError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_program_name(field_name: &str, program: &str) -> Result<()> {
    validate_non_empty_string(field_name, program)?;

    if program.contains('\0') {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: program.escape_default().to_string(),
            reason: "Program name contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(SmokeError::ConfigError {
            message: format!("'{}' must list at least one entry", field_name),
        });
    }
    Ok(())
}
