use actix_web::web;

use crate::{handlers::home, repositories::profile::ProfileRepository};

mod json_error;
mod profile;
mod system;

/// Mounts every route of the API for a store of type `R`.
pub fn configure_routes<R>(cfg: &mut web::ServiceConfig)
where
    R: ProfileRepository + 'static,
{
    cfg.configure(json_error::config_routes);

    cfg.service(web::resource("/").route(web::get().to(home::home)));

    cfg.service(
        web::scope("/api")
            .configure(system::config_routes::<R>)
            .configure(profile::config_routes::<R>)
    );

    cfg.default_service(web::to(home::not_found));
}
