//! Utilidades de validación
//!
//! Validadores custom para los DTOs (`#[validate(custom = "...")]`)
//! y conversión de tipos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::models::expense::EXPENSE_CATEGORIES;
use crate::models::profile::USER_ROLES;

lazy_static! {
    static ref US_ZIP_RE: Regex = Regex::new(r"^\d{5}$").expect("valid zip regex");
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea estrictamente positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + Serialize>(
    value: &T,
) -> Result<(), ValidationError> {
    if *value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), value);
        return Err(error);
    }
    Ok(())
}

/// `validate_positive` para campos `f64`, que validator pasa por valor
pub fn validate_positive_f64(value: f64) -> Result<(), ValidationError> {
    validate_positive(&value)
}

/// Validar que el rol sea uno de los del onboarding
pub fn validate_user_role(value: &str) -> Result<(), ValidationError> {
    if !USER_ROLES.contains(&value) {
        let mut error = ValidationError::new("user_role");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &USER_ROLES.join(", "));
        return Err(error);
    }
    Ok(())
}

/// Validar que la categoría de gasto sea una de las conocidas
pub fn validate_expense_category(value: &str) -> Result<(), ValidationError> {
    if !EXPENSE_CATEGORIES.contains(&value) {
        let mut error = ValidationError::new("expense_category");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &EXPENSE_CATEGORIES.join(", "));
        return Err(error);
    }
    Ok(())
}

/// Validar código postal de EE.UU. (5 dígitos)
pub fn validate_zip_code(value: &str) -> Result<(), ValidationError> {
    if !US_ZIP_RE.is_match(value.trim()) {
        let mut error = ValidationError::new("zip_code");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"5 digits".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Dallas, TX").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(&5).is_ok());
        assert!(validate_positive(&0.5_f64).is_ok());
        assert!(validate_positive(&0).is_err());
        assert!(validate_positive(&-5.0_f64).is_err());
        assert!(validate_positive_f64(0.01).is_ok());
        assert!(validate_positive_f64(0.0).is_err());
    }

    #[test]
    fn test_validate_user_role() {
        assert!(validate_user_role("fleet_manager").is_ok());
        assert!(validate_user_role("admin").is_err());
    }

    #[test]
    fn test_validate_expense_category() {
        assert!(validate_expense_category("Tolls").is_ok());
        assert!(validate_expense_category("tolls").is_err());
        assert!(validate_expense_category("Snacks").is_err());
    }

    #[test]
    fn test_validate_zip_code() {
        assert!(validate_zip_code("73301").is_ok());
        assert!(validate_zip_code(" 73301 ").is_ok());
        assert!(validate_zip_code("7330").is_err());
        assert!(validate_zip_code("73301-0001").is_err());
        assert!(validate_zip_code("ABCDE").is_err());
    }
}
