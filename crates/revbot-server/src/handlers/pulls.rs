use actix_web::{web, HttpResponse};
use revbot_core::use_cases::pulls::{
    CreatePullRequestInterface, MergePullRequestInterface, ReassignReviewerInterface,
};
use revbot_models::PullRequestShort;
use serde::Deserialize;
use shaku::HasComponent;

use crate::{server::AppContext, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct MergeJson {
    pull_request_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReassignJson {
    pull_request_id: String,
    old_user_id: String,
}

#[tracing::instrument(skip_all, fields(pull_request_id = data.id, author_id = data.author_id), ret)]
pub(crate) async fn create(
    ctx: web::Data<AppContext>,
    data: web::Json<PullRequestShort>,
) -> Result<HttpResponse> {
    let create_pull_request: &dyn CreatePullRequestInterface = ctx.core_module.resolve_ref();
    let pull_request = create_pull_request
        .run(&ctx.as_core_context(), data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "pr": pull_request })))
}

#[tracing::instrument(skip_all, fields(pull_request_id = data.pull_request_id), ret)]
pub(crate) async fn merge(
    ctx: web::Data<AppContext>,
    data: web::Json<MergeJson>,
) -> Result<HttpResponse> {
    let merge_pull_request: &dyn MergePullRequestInterface = ctx.core_module.resolve_ref();
    let pull_request = merge_pull_request
        .run(&ctx.as_core_context(), &data.pull_request_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "pr": pull_request })))
}

#[tracing::instrument(skip_all, fields(
    pull_request_id = data.pull_request_id,
    old_user_id = data.old_user_id
), ret)]
pub(crate) async fn reassign(
    ctx: web::Data<AppContext>,
    data: web::Json<ReassignJson>,
) -> Result<HttpResponse> {
    let reassign_reviewer: &dyn ReassignReviewerInterface = ctx.core_module.resolve_ref();
    let result = reassign_reviewer
        .run(
            &ctx.as_core_context(),
            &data.pull_request_id,
            &data.old_user_id,
        )
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "pr": result.pull_request,
        "replaced_by": result.replaced_by,
    })))
}
