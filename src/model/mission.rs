use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MissionDto {
    pub id: i32,
    pub name: String,
    pub deployment: String,
    pub primary_objective: String,
    pub rules: String,
}

/// Request body for both creating and updating a mission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MissionPayloadDto {
    pub name: String,
    pub deployment: String,
    pub primary_objective: String,
    #[serde(default)]
    pub rules: String,
}
