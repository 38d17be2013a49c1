//! Route table and lookup.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Look up the matching route for a (method, path) pair
//! - Return the matched entry and bound path parameters, or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan, first match wins; routes must not overlap per method
//! - A path registered under a different method is a no-match, not a 405

use std::collections::HashMap;

use axum::http::Method;
use axum::response::Response;

use crate::http::request::RequestContext;
use crate::routing::pattern::PathPattern;

/// Authorization policy attached to a route at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// No credential required.
    Public,
    /// The request must pass the API key gate.
    ApiKey,
}

/// Handler signature: a pure mapping from request context to response.
pub type HandlerFn = fn(&RequestContext<'_>) -> Response;

/// A single registered route.
pub struct RouteEntry {
    method: Method,
    pattern: PathPattern,
    auth: AuthPolicy,
    handler: HandlerFn,
}

impl RouteEntry {
    pub fn auth(&self) -> AuthPolicy {
        self.auth
    }

    /// The registered pattern, e.g. `/api/users/:userId`.
    pub fn template(&self) -> &str {
        self.pattern.template()
    }

    pub fn handle(&self, ctx: &RequestContext<'_>) -> Response {
        (self.handler)(ctx)
    }
}

/// A successful lookup: the entry plus the path parameters it bound.
pub struct RouteMatch<'r> {
    pub entry: &'r RouteEntry,
    pub params: HashMap<String, String>,
}

/// Ordered route table, registered once at startup and immutable afterwards.
#[derive(Default)]
pub struct Router {
    routes: Vec<RouteEntry>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route. Startup only; patterns for the same method must not
    /// overlap.
    pub fn register(&mut self, method: Method, pattern: &str, auth: AuthPolicy, handler: HandlerFn) {
        self.routes.push(RouteEntry {
            method,
            pattern: PathPattern::parse(pattern),
            auth,
            handler,
        });
    }

    /// Look up the route for a concrete (method, path) pair.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|entry| {
            if entry.method != *method {
                return None;
            }
            entry
                .pattern
                .matches(path)
                .map(|params| RouteMatch { entry, params })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn ok(_ctx: &RequestContext<'_>) -> Response {
        StatusCode::OK.into_response()
    }

    fn table() -> Router {
        let mut router = Router::new();
        router.register(Method::GET, "/healthz", AuthPolicy::Public, ok);
        router.register(Method::GET, "/api/users", AuthPolicy::ApiKey, ok);
        router.register(Method::POST, "/api/users", AuthPolicy::ApiKey, ok);
        router.register(Method::GET, "/api/users/:userId", AuthPolicy::ApiKey, ok);
        router
    }

    #[test]
    fn lookup_is_method_specific() {
        let router = table();
        assert!(router.lookup(&Method::GET, "/healthz").is_some());
        // Same path, wrong method: no match rather than 405.
        assert!(router.lookup(&Method::POST, "/healthz").is_none());
        assert!(router.lookup(&Method::DELETE, "/api/users").is_none());
    }

    #[test]
    fn lookup_binds_path_params() {
        let router = table();
        let matched = router.lookup(&Method::GET, "/api/users/user-7").unwrap();
        assert_eq!(matched.entry.template(), "/api/users/:userId");
        assert_eq!(
            matched.params.get("userId").map(String::as_str),
            Some("user-7")
        );
    }

    #[test]
    fn unknown_path_is_no_match() {
        let router = table();
        assert!(router.lookup(&Method::GET, "/nonexistent").is_none());
    }

    #[test]
    fn first_registered_wins() {
        fn first(_ctx: &RequestContext<'_>) -> Response {
            StatusCode::OK.into_response()
        }
        fn second(_ctx: &RequestContext<'_>) -> Response {
            StatusCode::IM_A_TEAPOT.into_response()
        }

        let mut router = Router::new();
        router.register(Method::GET, "/dup", AuthPolicy::Public, first);
        router.register(Method::GET, "/dup", AuthPolicy::ApiKey, second);

        let matched = router.lookup(&Method::GET, "/dup").unwrap();
        assert_eq!(matched.entry.auth(), AuthPolicy::Public);
    }

    #[test]
    fn auth_policy_travels_with_the_entry() {
        let router = table();
        let healthz = router.lookup(&Method::GET, "/healthz").unwrap();
        assert_eq!(healthz.entry.auth(), AuthPolicy::Public);

        let users = router.lookup(&Method::GET, "/api/users").unwrap();
        assert_eq!(users.entry.auth(), AuthPolicy::ApiKey);
    }
}
