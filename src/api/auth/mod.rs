//! Authentication API endpoints
//!
//! Phone-number based registration and login with JWT tokens.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::services::RegisterUserRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register))
        .route("/login/", post(login))
        .route("/me/", get(get_current_user))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone_number: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone_number: String,
}

/// Token response returned by register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: UserResponse,
    pub expires_at: String,
}

/// User response (safe to expose)
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub created_at: String,
}

impl UserResponse {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id().as_i64(),
            name: user.name().to_string(),
            phone_number: user.phone_number().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// Register a new user
///
/// POST /api/register/
///
/// Creates the user and returns a JWT token so the client can start
/// submitting reviews immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let user = state
        .user_service
        .register(RegisterUserRequest {
            name: request.name,
            phone_number: request.phone_number,
        })
        .await?;

    let response = issue_token(&state, &user)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with a registered phone number
///
/// POST /api/login/
///
/// Returns a JWT token on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate_by_phone(&request.phone_number)
        .await?
        .ok_or_else(|| ApiError::unauthorized("No active user with this phone number"))?;

    Ok(Json(issue_token(&state, &user)?))
}

/// Get current authenticated user
///
/// GET /api/me/
pub async fn get_current_user(
    RequireUser(user): RequireUser,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(UserResponse::from_user(&user)))
}

fn issue_token(state: &AppState, user: &User) -> Result<TokenResponse, ApiError> {
    let token = state
        .jwt_service
        .generate(user)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let expires_at = Utc::now() + Duration::hours(state.jwt_service.expiration_hours() as i64);

    Ok(TokenResponse {
        token,
        user: UserResponse::from_user(user),
        expires_at: expires_at.to_rfc3339(),
    })
}
