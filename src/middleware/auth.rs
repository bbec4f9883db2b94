use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Already-authenticated actor forwarded by the upstream gateway. This
/// service trusts the gateway's identity headers and performs no token
/// verification of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub role: String,
}

impl Actor {
    pub fn is_teacher(&self) -> bool {
        self.role.eq_ignore_ascii_case("teacher")
    }

    pub fn is_student(&self) -> bool {
        self.role.eq_ignore_ascii_case("student")
    }
}

fn extract_actor(req: &Request) -> Option<Actor> {
    let id = req
        .headers()
        .get("x-actor-id")?
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw).ok())?;
    let role = req
        .headers()
        .get("x-actor-role")?
        .to_str()
        .ok()?
        .to_string();
    Some(Actor { id, role })
}

pub async fn require_actor(mut req: Request, next: Next) -> Response {
    match extract_actor(&req) {
        Some(actor) => {
            req.extensions_mut().insert(actor);
            next.run(req).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "missing_identity"})),
        )
            .into_response(),
    }
}

pub async fn require_teacher(mut req: Request, next: Next) -> Response {
    match extract_actor(&req) {
        Some(actor) if actor.is_teacher() => {
            req.extensions_mut().insert(actor);
            next.run(req).await
        }
        Some(_) => (StatusCode::FORBIDDEN, Json(json!({"error": "forbidden"}))).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "missing_identity"})),
        )
            .into_response(),
    }
}
