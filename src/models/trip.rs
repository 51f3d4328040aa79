//! Modelo de Trip
//!
//! Viajes registrados por vehículo. La distancia se guarda en km y la
//! duración en minutos.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub car_id: Uuid,
    pub date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub distance: f64,
    pub duration: u32,
}

/// Request para crear un viaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub car_id: Uuid,

    /// Si no se envía se usa la fecha actual
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 200))]
    pub start_location: String,

    #[validate(length(min = 1, max = 200))]
    pub end_location: String,

    #[validate(range(min = 0.0))]
    pub distance: f64,

    pub duration: Option<u32>,
}

/// Request para actualizar un viaje
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 200))]
    pub start_location: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub end_location: Option<String>,

    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,

    pub duration: Option<u32>,
}

impl Trip {
    /// Título usado en el feed de actividad
    pub fn title(&self) -> String {
        format!("{} → {}", self.start_location, self.end_location)
    }
}
