/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines all
 * route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health probe
 * 2. API routes (auth, weather)
 * 3. Fallback handler (404)
 *
 * Request logging applies to every route through the trace layer.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::routes::health::health_check;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool, token issuer, and
///   weather client
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Health
///
/// - `GET /health` - Liveness probe
///
/// ## API Routes
///
/// - `POST /api/auth/signup` - User registration
/// - `POST /api/auth/login` - User login
/// - `GET /api/auth/me` - Get current user (requires authentication)
/// - `GET /api/weather` - Weather lookup (requires authentication)
///
/// ## Fallback
///
/// Unknown routes answer 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", axum::routing::get(health_check));

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
