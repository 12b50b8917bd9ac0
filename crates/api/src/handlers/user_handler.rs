//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use tracing::info;

use common::AppResult;
use domain::{AdjustHours, CreateUser, ReplaceName, User, UserId, USER_NOT_FOUND_MESSAGE};

use crate::extractors::{AppJson, AppPath};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).delete(delete_all_users),
        )
        .route(
            "/users/:id",
            get(get_user)
                .put(replace_user_name)
                .patch(add_user_hours)
                .delete(delete_user),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    info!("GET /users - Returning {} users", users.len());
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
) -> AppResult<Json<User>> {
    info!("GET /users/{} - Fetching user by ID", id);
    let user = state
        .user_service
        .get_user(id)
        .await
        .map_err(|e| {
            info!("GET /users/{} - User not found", id);
            e.with_not_found_message(USER_NOT_FOUND_MESSAGE)
        })?;
    info!("GET /users/{} - Found user: {:?}", id, user);
    Ok(Json(user))
}

/// Create a user with zero hours worked
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Malformed body or missing name")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.create_user(payload.name).await?;
    info!("POST /users - Added new user: {:?}", user);
    Ok(Json(user))
}

/// Replace a user's name
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = ReplaceName,
    responses(
        (status = 200, description = "User renamed", body = User),
        (status = 400, description = "Malformed body or missing name"),
        (status = 404, description = "User not found")
    )
)]
pub async fn replace_user_name(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
    AppJson(payload): AppJson<ReplaceName>,
) -> AppResult<Json<User>> {
    info!("PUT /users/{} - Updating user", id);
    let user = state.user_service.rename_user(id, payload.name).await?;
    info!("PUT /users/{} - Updated user: {:?}", id, user);
    Ok(Json(user))
}

/// Add hours to a user's total
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = AdjustHours,
    responses(
        (status = 200, description = "Hours added", body = User),
        (status = 400, description = "Missing or non-numeric hoursToAdd, or a total that would not be finite"),
        (status = 404, description = "User not found")
    )
)]
pub async fn add_user_hours(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
    AppJson(payload): AppJson<AdjustHours>,
) -> AppResult<Json<User>> {
    info!("PATCH /users/{} - Adding {} hours", id, payload.hours_to_add);
    let user = state
        .user_service
        .add_hours(id, payload.hours_to_add)
        .await?;
    info!("PATCH /users/{} - Updated user hours: {:?}", id, user);
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The deleted user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
) -> AppResult<Json<User>> {
    info!("DELETE /users/{} - Deleting user", id);
    let user = state.user_service.delete_user(id).await?;
    info!("DELETE /users/{} - Deleted user: {:?}", id, user);
    Ok(Json(user))
}

/// Delete all users and restart ids at 1
#[utoipa::path(
    delete,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Empty user list", body = Vec<User>)
    )
)]
pub async fn delete_all_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.delete_all_users().await?;
    info!("DELETE /users - Deleted all users");
    Ok(Json(users))
}
