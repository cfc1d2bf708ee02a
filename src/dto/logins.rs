use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateLoginRequest {
    pub email: String,
    pub password: String,
}
