use serde::Serialize;

/// Respuesta genérica de las mutaciones
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Respuesta sin payload (por ejemplo, tras un borrado)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Respuesta de `GET /api/cars/:id/exists`
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}
