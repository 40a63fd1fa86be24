use actix_web::{web, HttpResponse};
use revbot_core::use_cases::teams::{AddTeamInterface, GetTeamInterface};
use revbot_models::Team;
use serde::Deserialize;
use shaku::HasComponent;

use crate::{server::AppContext, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct TeamQuery {
    team_name: String,
}

#[tracing::instrument(skip_all, fields(team_name = data.name), ret)]
pub(crate) async fn add_team(
    ctx: web::Data<AppContext>,
    data: web::Json<Team>,
) -> Result<HttpResponse> {
    let add_team: &dyn AddTeamInterface = ctx.core_module.resolve_ref();
    let team = add_team
        .run(&ctx.as_core_context(), data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "team": team })))
}

#[tracing::instrument(skip_all, fields(team_name = query.team_name), ret)]
pub(crate) async fn get_team(
    ctx: web::Data<AppContext>,
    query: web::Query<TeamQuery>,
) -> Result<HttpResponse> {
    let get_team: &dyn GetTeamInterface = ctx.core_module.resolve_ref();
    let team = get_team
        .run(&ctx.as_core_context(), &query.team_name)
        .await?;

    Ok(HttpResponse::Ok().json(team))
}
