//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::extractors::{MugshotUpload, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{NewUser, UserMap, UserPatch, UserResponse};
use crate::errors::AppResult;

/// Query parameters for user creation
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateUserParams {
    /// User name
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[param(min_length = 2, example = "ann")]
    pub name: String,
    /// User password
    #[validate(length(
        min = 4,
        max = 16,
        message = "Password must be between 4 and 16 characters"
    ))]
    #[param(min_length = 4, max_length = 16, example = "secret1")]
    pub pw: String,
}

/// Create user routes. Trailing slashes are part of every path.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users))
        .route("/users/:id/", get(get_user))
        .route("/users/create/", post(create_user))
        .route("/users/update/:id/", put(update_user))
        .route("/users/delete/:id/", delete(delete_user))
}

/// List all users keyed by user key
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    responses(
        (status = 200, description = "All stored users", body = std::collections::BTreeMap<String, crate::domain::User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserMap>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by key
#[utoipa::path(
    get,
    path = "/users/{id}/",
    tag = "users",
    params(
        ("id" = String, Path, description = "User key", example = "user1")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a user from query parameters and an optional `mugshot` file
/// sent as `multipart/form-data`
#[utoipa::path(
    post,
    path = "/users/create/",
    tag = "users",
    params(CreateUserParams),
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed multipart body"),
        (status = 413, description = "Mugshot exceeds the upload limit"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CreateUserParams>,
    MugshotUpload(mugshot): MugshotUpload,
) -> AppResult<Json<UserResponse>> {
    let (_, user) = state
        .user_service
        .create_user(NewUser {
            name: params.name,
            password: params.pw,
            mugshot,
        })
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Merge the given fields into an existing user
#[utoipa::path(
    put,
    path = "/users/update/{id}/",
    tag = "users",
    params(
        ("id" = String, Path, description = "User key", example = "user1")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<UserPatch>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update_user(&id, patch).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user and return the remaining users
#[utoipa::path(
    delete,
    path = "/users/delete/{id}/",
    tag = "users",
    params(
        ("id" = String, Path, description = "User key", example = "user2")
    ),
    responses(
        (status = 200, description = "Remaining users", body = std::collections::BTreeMap<String, crate::domain::User>),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserMap>> {
    let remaining = state.user_service.delete_user(&id).await?;
    Ok(Json(remaining))
}
