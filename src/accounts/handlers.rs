use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    accounts::{
        dto::{
            ChangePasswordRequest, ChangePasswordResponse, LoginRequest, LoginResponse,
            ProfileQuery, ProfileResponse, RegisterRequest, RegisterResponse,
        },
        error::AccountError,
        service,
    },
    state::AppState,
};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/password", put(change_password))
        .route("/auth/login", post(login))
        .route("/profile", get(profile))
}

fn normalize_email(email: Option<String>) -> String {
    email.unwrap_or_default().trim().to_lowercase()
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AccountError> {
    let email = normalize_email(payload.email);
    let password = payload.password.unwrap_or_default();

    let user = service::register(&state.db, &email, &password).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".into(),
            user,
            redirect: "/profile".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AccountError> {
    let email = normalize_email(payload.email);
    let password = payload.password.unwrap_or_default();

    let user = service::login(&state.db, &email, &password).await?;
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<ChangePasswordResponse>, AccountError> {
    let email = normalize_email(payload.email);
    let password = payload.password.unwrap_or_default();

    service::change_password(&state.db, &email, &password, payload.new_password.as_deref())
        .await?;
    Ok(Json(ChangePasswordResponse {
        message: "Password changed successfully".into(),
        redirect: "/login".into(),
    }))
}

#[instrument(skip(state))]
pub async fn profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, AccountError> {
    let raw_id = params.id.as_deref().or(params.user_id.as_deref());
    let user = service::profile(&state.db, raw_id).await?;
    Ok(Json(ProfileResponse { user }))
}
