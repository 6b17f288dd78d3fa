/**
 * API Route Handlers
 *
 * This module wires the API endpoints into the router.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user info (requires authentication)
 *
 * ## Weather
 * - `GET /api/weather` - Current conditions for a city (requires authentication)
 */

use axum::{middleware::from_fn_with_state, Router};

use crate::auth::{get_me, login, signup};
use crate::middleware::require_auth;
use crate::server::state::AppState;
use crate::weather::get_weather;

/// Configure API routes
///
/// Public routes are added directly; protected routes are grouped behind
/// the auth middleware so the token check runs before any of their handlers.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, needed by the auth layer for the
///   token issuer
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// Protected routes (JWT in the `Authorization` header, `Bearer <token>`
/// or the bare token):
/// - `/api/auth/me`
/// - `/api/weather`
///
/// Public routes:
/// - `/api/auth/signup` - Public (creates new user)
/// - `/api/auth/login` - Public (returns session token)
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/api/auth/me",
            axum::routing::get(get_me),
        )
        .route(
            "/api/weather",
            axum::routing::get(get_weather),
        )
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    router
        // Authentication endpoints
        .route(
            "/api/auth/signup",
            axum::routing::post(signup),
        )
        .route(
            "/api/auth/login",
            axum::routing::post(login),
        )
        // Token-gated endpoints
        .merge(protected)
}
