use actix_web::web;

use crate::{handlers::profile, repositories::profile::ProfileRepository};

pub fn config_routes<R>(cfg: &mut web::ServiceConfig)
where
    R: ProfileRepository + 'static,
{
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(profile::get_profile::<R>))
            .route(web::put().to(profile::update_profile::<R>))
    )
    .service(
        web::resource("/projects")
            .route(web::get().to(profile::get_projects_by_skill::<R>))
    )
    .service(
        web::resource("/skills/top")
            .route(web::get().to(profile::get_top_skills::<R>))
    )
    .service(
        web::resource("/search")
            .route(web::get().to(profile::search_profile::<R>))
    );
}
