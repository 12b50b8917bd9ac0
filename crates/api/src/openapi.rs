//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{AdjustHours, CreateUser, ReplaceName, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::replace_user_name,
        crate::handlers::user_handler::add_user_hours,
        crate::handlers::user_handler::delete_user,
        crate::handlers::user_handler::delete_all_users,
    ),
    components(
        schemas(
            User,
            CreateUser,
            ReplaceName,
            AdjustHours,
        )
    ),
    tags(
        (name = "Users", description = "User and hours tracking endpoints"),
    )
)]
pub struct ApiDoc;
