use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::group::{Group, GroupName};

/// Request body for creating a group
#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Group as returned by the API
#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name().to_string(),
            created_at: group.created_at(),
        }
    }
}

/// Create a new group
///
/// POST /api/groups
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    let group = Group::new(&req.name)?;
    state.groups.create(&group).await?;

    tracing::info!(group = %group.name(), "group created");
    Ok((StatusCode::CREATED, Json(GroupResponse::from(&group))))
}

/// List all groups in creation order
///
/// GET /api/groups
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    let groups = state.groups.list_all().await?;
    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}

/// Delete a group and its whole roster
///
/// DELETE /api/groups/:group
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<StatusCode, ApiError> {
    let group = GroupName::new(&group)?;
    state.rosters.remove_group(&group).await?;

    tracing::info!(group = %group, "group removed");
    Ok(StatusCode::NO_CONTENT)
}
