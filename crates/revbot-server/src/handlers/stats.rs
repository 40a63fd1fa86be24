use actix_web::{web, HttpResponse};
use revbot_core::use_cases::stats::GetAssignStatsInterface;
use shaku::HasComponent;

use crate::{server::AppContext, Result};

#[tracing::instrument(skip_all, ret)]
pub(crate) async fn reviewers(ctx: web::Data<AppContext>) -> Result<HttpResponse> {
    let get_assign_stats: &dyn GetAssignStatsInterface = ctx.core_module.resolve_ref();
    let stats = get_assign_stats.run(&ctx.as_core_context()).await?;

    Ok(HttpResponse::Ok().json(stats))
}
