use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::group::GroupName;
use crate::domain::person::{Person, PersonName, Team};

/// Request body for adding a player to a group
#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
    pub team: Team,
}

/// Optional team filter for listing players
#[derive(Debug, Deserialize)]
pub struct ListPlayersQuery {
    pub team: Option<Team>,
}

/// Player as returned by the API
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub name: String,
    pub team: Team,
}

impl From<&Person> for PlayerResponse {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.to_string(),
            team: person.team,
        }
    }
}

/// Add a player to one of the group's teams
///
/// POST /api/groups/:group/players
pub async fn add_player(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Json(req): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let group = GroupName::new(&group)?;
    let person = Person::new(&req.name, req.team)?;

    state.rosters.add_person(&group, &person).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&person))))
}

/// List a group's players, optionally for one team only
///
/// GET /api/groups/:group/players?team=team_a
pub async fn list_players(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Query(query): Query<ListPlayersQuery>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let group = GroupName::new(&group)?;

    let people = match query.team {
        Some(team) => state.rosters.list_by_group_and_team(&group, team).await?,
        None => state.rosters.list_by_group(&group).await?,
    };

    Ok(Json(people.iter().map(PlayerResponse::from).collect()))
}

/// Remove a player from a group
///
/// DELETE /api/groups/:group/players/:name
pub async fn remove_player(
    State(state): State<AppState>,
    Path((group, name)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let group = GroupName::new(&group)?;
    let name = PersonName::new(&name)?;

    state.rosters.remove_person(&group, &name).await?;

    Ok(StatusCode::NO_CONTENT)
}
