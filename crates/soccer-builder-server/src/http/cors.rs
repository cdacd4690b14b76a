use crate::AppState;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

fn origin_allowed(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|entry| entry == "*" || entry == origin)
}

fn apply_origin_headers(response: &mut Response, origin: &str) {
    if let Ok(value) = HeaderValue::from_str(origin) {
        response
            .headers_mut()
            .insert("access-control-allow-origin", value);
    }
    response.headers_mut().insert(
        "access-control-allow-credentials",
        HeaderValue::from_static("true"),
    );
}

pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(origin_value) = origin {
            if origin_allowed(&state.cors_allowed_origins, &origin_value) {
                apply_origin_headers(&mut resp, &origin_value);
                resp.headers_mut().insert(
                    "access-control-allow-methods",
                    HeaderValue::from_static("*"),
                );
                resp.headers_mut().insert(
                    "access-control-allow-headers",
                    HeaderValue::from_static("*"),
                );
            }
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(origin_value) = origin {
        if origin_allowed(&state.cors_allowed_origins, &origin_value) {
            apply_origin_headers(&mut resp, &origin_value);
            resp.headers_mut()
                .insert("vary", HeaderValue::from_static("Origin"));
        }
    }
    resp
}
