//! Field validators
//!
//! Each validator is a pure function over the raw field value. The error's
//! `Display` is the message shown under the field.

use super::step::{SECTOR_OPTIONS, SIZE_OPTIONS};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").expect("valid phone regex"));

/// Minimum trimmed length of a company name
const MIN_COMPANY_LEN: usize = 2;

/// Field-level validation failure; blocks advancing until corrected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor ingresa un correo válido")]
    InvalidEmail,
    #[error("Por favor ingresa un teléfono válido")]
    InvalidPhone,
    #[error("El nombre debe tener al menos 2 caracteres")]
    CompanyTooShort,
    #[error("Por favor selecciona un sector")]
    MissingSector,
    #[error("Por favor selecciona el tamaño")]
    MissingSize,
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Keep only digits and `+`
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(&normalize_phone(value)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

pub fn validate_company(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() >= MIN_COMPANY_LEN {
        Ok(())
    } else {
        Err(ValidationError::CompanyTooShort)
    }
}

pub fn validate_sector(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && SECTOR_OPTIONS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::MissingSector)
    }
}

pub fn validate_size(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && SIZE_OPTIONS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::MissingSize)
    }
}
