use serde::{Deserialize, Serialize};

/// The response body when a request fails
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
