//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentOperator, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Paths under `/api/` reachable without a token
const PUBLIC_API_ROUTES: &[&str] = &["/api/health"];

/// Require a valid operator token on `/api/*`
///
/// Reads `Authorization: Bearer <token>` and inserts [`CurrentOperator`]
/// into the request extensions.
///
/// Skipped for `OPTIONS` (CORS preflight), non-API paths and
/// [`PUBLIC_API_ROUTES`].
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS
        || !path.starts_with("/api/")
        || PUBLIC_API_ROUTES.contains(&path)
    {
        return Ok(next.run(req).await);
    }

    let operator = authenticate(state.jwt_service(), req.headers(), req.uri())?;
    req.extensions_mut().insert(operator);
    Ok(next.run(req).await)
}

/// Validate the bearer token in `headers`
pub(crate) fn authenticate(
    jwt: &JwtService,
    headers: &http::HeaderMap,
    uri: &http::Uri,
) -> Result<CurrentOperator, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", uri));
            return Err(AppError::not_authenticated());
        }
    };

    match jwt.validate_token(token) {
        Ok(claims) => Ok(CurrentOperator::from(claims)),
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", uri)
            );
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}
