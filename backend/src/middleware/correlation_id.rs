use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Correlation id for the current request, available to handlers as an
/// extension. Client-supplied ids are preserved so mobile traces line up
/// with server logs; otherwise a fresh uuid is generated.
#[derive(Clone, Debug)]
pub struct CorrelationId(pub String);

pub async fn correlation_id(mut req: Request, next: Next) -> Response {
    let header_name = HeaderName::from_static(CORRELATION_ID_HEADER);

    let id = req
        .headers()
        .get(&header_name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(CorrelationId(id.clone()));

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(header_name, value);
    }

    response
}
