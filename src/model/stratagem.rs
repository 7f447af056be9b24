use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StratagemDto {
    pub id: i32,
    /// `None` for core stratagems available to every army.
    pub detachment_id: Option<i32>,
    pub name: String,
    pub cp_cost: i32,
    pub phase: String,
    pub description: String,
}

/// Request body for both creating and updating a stratagem.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StratagemPayloadDto {
    #[serde(default)]
    pub detachment_id: Option<i32>,
    pub name: String,
    pub cp_cost: i32,
    pub phase: String,
    #[serde(default)]
    pub description: String,
}
