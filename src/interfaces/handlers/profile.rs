use actix_web::{web, HttpResponse, Responder};

use crate::{
    entities::{
        profile::UpdateProfileRequest,
        search::{SearchQuery, SkillFilterQuery},
    },
    repositories::profile::ProfileRepository,
    AppState,
};

pub async fn get_profile<R>(state: web::Data<AppState<R>>) -> impl Responder
where
    R: ProfileRepository + 'static,
{
    match state.profile_handler.get_full_profile().await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_profile<R>(
    state: web::Data<AppState<R>>,
    body: web::Json<UpdateProfileRequest>,
) -> impl Responder
where
    R: ProfileRepository + 'static,
{
    match state.profile_handler.update_profile(body.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_projects_by_skill<R>(
    state: web::Data<AppState<R>>,
    query: web::Query<SkillFilterQuery>,
) -> impl Responder
where
    R: ProfileRepository + 'static,
{
    match state.profile_handler.get_projects_by_skill(query.into_inner()).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_top_skills<R>(state: web::Data<AppState<R>>) -> impl Responder
where
    R: ProfileRepository + 'static,
{
    match state.profile_handler.get_top_skills().await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => e.to_http_response(),
    }
}

pub async fn search_profile<R>(
    state: web::Data<AppState<R>>,
    query: web::Query<SearchQuery>,
) -> impl Responder
where
    R: ProfileRepository + 'static,
{
    match state.profile_handler.search(query.into_inner()).await {
        Ok(results) => HttpResponse::Ok().json(results),
        Err(e) => e.to_http_response(),
    }
}
