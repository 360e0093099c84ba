//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. The
//! collected document is served at `/api/docs/openapi.json` with Swagger UI at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are registered through one `routes!` call so their methods
/// end up on the same route.
///
/// # Registered Endpoints
/// - `POST /api/auth/login`, `POST /api/auth/logout`, `GET /api/auth/user`
/// - `GET|POST /api/products`, `GET|PUT /api/products/{id}`
/// - `GET|POST /api/raw-materials`, `GET /api/raw-materials/low-stock`,
///   `GET|PUT /api/raw-materials/{id}`
/// - `GET|POST /api/requests`, `PUT /api/requests/{id}/status`
/// - `GET /api/audit-logs`
/// - `GET /api/dashboard/stats`
/// - `GET /api/health`
///
/// The session layer is not part of this router; it is applied by
/// [`startup::apply_session_layer`](crate::server::startup::apply_session_layer) once the
/// state has been attached.
///
/// # Example
/// ```ignore
/// let app = routes().with_state(AppState::from(db));
/// let app = startup::apply_session_layer(app, &config.session, store);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Tea Inventory", description = "Tea inventory management API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Session authentication"),
            (name = controller::product::PRODUCT_TAG, description = "Finished tea products"),
            (name = controller::raw_material::RAW_MATERIAL_TAG, description = "Raw materials and packaging"),
            (name = controller::request::REQUEST_TAG, description = "Stock requests and review"),
            (name = controller::audit::AUDIT_TAG, description = "Audit trail"),
            (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard statistics"),
            (name = controller::health::HEALTH_TAG, description = "Liveness"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::product::list_products,
            controller::product::create_product
        ))
        .routes(routes!(
            controller::product::get_product,
            controller::product::update_product
        ))
        .routes(routes!(
            controller::raw_material::list_raw_materials,
            controller::raw_material::create_raw_material
        ))
        .routes(routes!(controller::raw_material::list_low_stock))
        .routes(routes!(
            controller::raw_material::get_raw_material,
            controller::raw_material::update_raw_material
        ))
        .routes(routes!(
            controller::request::list_requests,
            controller::request::create_request
        ))
        .routes(routes!(controller::request::update_request_status))
        .routes(routes!(controller::audit::list_audit_logs))
        .routes(routes!(controller::dashboard::get_stats))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
