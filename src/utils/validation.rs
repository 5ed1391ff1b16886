use crate::utils::error::{Result, ZooError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects an output path that would overwrite the input.
pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ZooError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "animals.txt").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("output", "in.txt", "out.txt").is_ok());
        assert!(validate_distinct_paths("output", "data/in.txt", "data/in.txt").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("in.txt".to_string());
        let absent: Option<String> = None;
        assert_eq!(validate_required_field("input", &present).unwrap(), "in.txt");
        assert!(matches!(
            validate_required_field("input", &absent),
            Err(ZooError::MissingConfigError { field }) if field == "input"
        ));
    }
}
