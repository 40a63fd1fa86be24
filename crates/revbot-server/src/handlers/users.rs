use actix_web::{web, HttpResponse};
use revbot_core::use_cases::{
    pulls::ListPullRequestsByReviewerInterface, teams::SetUserIsActiveInterface,
};
use serde::Deserialize;
use shaku::HasComponent;

use crate::{server::AppContext, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct SetIsActiveJson {
    user_id: String,
    is_active: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserQuery {
    user_id: String,
}

#[tracing::instrument(skip_all, fields(user_id = data.user_id, is_active = data.is_active), ret)]
pub(crate) async fn set_is_active(
    ctx: web::Data<AppContext>,
    data: web::Json<SetIsActiveJson>,
) -> Result<HttpResponse> {
    let set_user_is_active: &dyn SetUserIsActiveInterface = ctx.core_module.resolve_ref();
    let user = set_user_is_active
        .run(&ctx.as_core_context(), &data.user_id, data.is_active)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "user": user })))
}

#[tracing::instrument(skip_all, fields(user_id = query.user_id), ret)]
pub(crate) async fn get_review(
    ctx: web::Data<AppContext>,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse> {
    let list_pull_requests: &dyn ListPullRequestsByReviewerInterface =
        ctx.core_module.resolve_ref();
    let pull_requests = list_pull_requests
        .run(&ctx.as_core_context(), &query.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "user_id": query.user_id,
        "pull_requests": pull_requests,
    })))
}
