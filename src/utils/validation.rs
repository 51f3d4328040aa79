//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para las validaciones que el derive
//! de `validator` no cubre: valores estrictamente positivos, campos en blanco
//! y rangos de fechas.

use chrono::NaiveDate;
use validator::ValidationError;

use crate::utils::errors::{bad_request_error, AppError, AppResult};

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
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un número sea finito y mayor que cero
pub fn validate_positive(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        let mut error = ValidationError::new("positive");
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un número sea finito y no negativo
pub fn validate_non_negative(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        let mut error = ValidationError::new("non_negative");
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Convierte un `ValidationError` suelto en `AppError::Validation` para `field`
pub fn into_app_error(field: &'static str, result: Result<(), ValidationError>) -> AppResult<()> {
    result.map_err(|error| field_error(field, error))
}

fn field_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

/// Parsea un parámetro de query `YYYY-MM-DD`; vacío cuenta como ausente
pub fn parse_date_param(field: &'static str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| validate_date(v).map_err(|error| field_error(field, error)))
        .transpose()
}

/// Validar un rango de fechas opcional
pub fn validate_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(bad_request_error(&format!(
            "startDate {} is after endDate {}",
            start, end
        ))),
        _ => Ok(()),
    }
}
