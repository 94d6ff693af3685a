//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject variable names the environment cannot hold
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ChillogConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ChillogConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyVariableName { field: &'static str },

    #[error("{field} contains '=' or NUL: {name:?}")]
    InvalidVariableName { field: &'static str, name: String },

    #[error("host_var and service_var both name {0}")]
    SameVariable(String),
}

pub fn validate_config(config: &ChillogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_variable_name("host_var", &config.host_var, &mut errors);
    check_variable_name("service_var", &config.service_var, &mut errors);

    if !config.host_var.is_empty() && config.host_var == config.service_var {
        errors.push(ValidationError::SameVariable(config.host_var.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_variable_name(field: &'static str, name: &str, errors: &mut Vec<ValidationError>) {
    if name.is_empty() {
        errors.push(ValidationError::EmptyVariableName { field });
    } else if name.contains('=') || name.contains('\0') {
        errors.push(ValidationError::InvalidVariableName {
            field,
            name: name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&ChillogConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ChillogConfig {
            host_var: String::new(),
            service_var: "A=B".to_string(),
            resolve_hostname: true,
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], ValidationError::EmptyVariableName { field: "host_var" });
        assert!(matches!(
            errors[1],
            ValidationError::InvalidVariableName { field: "service_var", .. }
        ));
    }

    #[test]
    fn test_same_variable_rejected() {
        let config = ChillogConfig {
            host_var: "NAME".to_string(),
            service_var: "NAME".to_string(),
            resolve_hostname: false,
        };
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::SameVariable("NAME".to_string())])
        );
    }
}
