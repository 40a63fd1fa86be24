//! HTTP handlers.

mod health;
mod pulls;
mod stats;
mod teams;
mod users;

use actix_web::web;

pub(crate) use health::health_check_route;

pub(crate) fn configure_api_handlers(cfg: &mut web::ServiceConfig) {
    cfg.route("/team/add", web::post().to(teams::add_team))
        .route("/team/get", web::get().to(teams::get_team))
        .route("/users/setIsActive", web::post().to(users::set_is_active))
        .route("/users/getReview", web::get().to(users::get_review))
        .route("/pullRequest/create", web::post().to(pulls::create))
        .route("/pullRequest/merge", web::post().to(pulls::merge))
        .route("/pullRequest/reassign", web::post().to(pulls::reassign))
        .route("/stats/reviewers", web::get().to(stats::reviewers));
}
