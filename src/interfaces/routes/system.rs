use actix_web::web;

use crate::{handlers::system, repositories::profile::ProfileRepository};

pub fn config_routes<R>(cfg: &mut web::ServiceConfig)
where
    R: ProfileRepository + 'static,
{
    cfg.service(
        web::resource("/health")
            .route(web::get().to(system::health_check::<R>))
    );
}
