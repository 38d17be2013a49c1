//! Request handlers.
//!
//! Pure mappings from `RequestContext` to response; no handler touches
//! shared mutable state or performs I/O. The user handlers fabricate
//! records from their input; nothing is stored, and a record "created"
//! here will not be found by a later lookup.

use axum::http::Method;

use crate::docs;
use crate::routing::{AuthPolicy, Router};

pub mod system;
pub mod users;

/// The complete route table, registered once at startup.
pub fn routes() -> Router {
    let mut router = Router::new();

    router.register(Method::GET, "/", AuthPolicy::Public, system::root);
    router.register(Method::GET, "/healthz", AuthPolicy::Public, system::healthz);
    router.register(Method::GET, "/readyz", AuthPolicy::Public, system::readyz);
    router.register(Method::GET, "/metrics", AuthPolicy::Public, system::metrics_snapshot);
    router.register(Method::GET, "/config", AuthPolicy::ApiKey, system::config_introspection);

    router.register(Method::GET, "/api-docs", AuthPolicy::Public, docs::swagger_ui);
    router.register(
        Method::GET,
        "/api-docs/swagger.json",
        AuthPolicy::Public,
        docs::openapi_json,
    );

    router.register(Method::GET, "/api/users", AuthPolicy::ApiKey, users::list);
    router.register(Method::POST, "/api/users", AuthPolicy::ApiKey, users::create);
    router.register(Method::GET, "/api/users/:userId", AuthPolicy::ApiKey, users::get);
    router.register(Method::PUT, "/api/users/:userId", AuthPolicy::ApiKey, users::update);
    router.register(
        Method::DELETE,
        "/api/users/:userId",
        AuthPolicy::ApiKey,
        users::delete,
    );

    router
}
