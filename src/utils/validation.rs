use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_no_nul(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(CalcError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}
