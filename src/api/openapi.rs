//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::domain::{License, Mugshot, User, UserPatch, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::update_user,
        crate::api::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            UserResponse,
            UserPatch,
            License,
            Mugshot,
        )
    ),
    tags(
        (name = "users", description = "In-memory user records"),
    )
)]
pub struct ApiDoc;
