use actix_web::{HttpRequest, HttpResponse, Responder};

use crate::constants::AVAILABLE_ENDPOINTS;

pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Resume Profile API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "profile": "/api/profile",
            "projects": "/api/projects?skill=JavaScript",
            "skills": "/api/skills/top",
            "search": "/api/search?q=react"
        }
    }))
}

pub async fn not_found(req: HttpRequest) -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Route not found",
        "message": format!("The requested route {} does not exist.", req.uri()),
        "available_endpoints": AVAILABLE_ENDPOINTS
    }))
}
