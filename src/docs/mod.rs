//! OpenAPI document and interactive UI.
//!
//! The document is built once on first use and served verbatim at
//! `/api-docs/swagger.json`; the UI page at `/api-docs` loads CDN-hosted
//! Swagger UI assets against it.

use std::sync::OnceLock;

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde_json::{json, Value};

use crate::http::request::RequestContext;

static DOCUMENT: OnceLock<Value> = OnceLock::new();

/// `GET /api-docs/swagger.json`: the OpenAPI 3.0 document.
pub fn openapi_json(_ctx: &RequestContext<'_>) -> Response {
    let document = DOCUMENT.get_or_init(openapi_document);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        document.to_string(),
    )
        .into_response()
}

/// `GET /api-docs`: the Swagger UI page.
pub fn swagger_ui(_ctx: &RequestContext<'_>) -> Response {
    Html(SWAGGER_UI_PAGE).into_response()
}

fn openapi_document() -> Value {
    let user_schema = json!({
        "type": "object",
        "properties": {
            "id": { "type": "string", "example": "user-1" },
            "email": { "type": "string", "format": "email", "example": "user@example.com" },
            "name": { "type": "string", "example": "DefaultUser" },
            "role": { "type": "string", "enum": ["user", "admin", "read-only-admin"], "example": "user" },
            "createdAt": { "type": "string", "format": "date-time", "example": "2024-01-01T00:00:00Z" }
        }
    });

    let error_response = |description: &str| {
        json!({
            "description": description,
            "content": {
                "application/json": {
                    "schema": {
                        "type": "object",
                        "properties": { "error": { "type": "string" } }
                    }
                }
            }
        })
    };

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "User API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Operational endpoints and a mock user management API guarded by a shared-secret key."
        },
        "components": {
            "securitySchemes": {
                "ApiKeyAuth": {
                    "type": "apiKey",
                    "in": "header",
                    "name": "X-API-Key",
                    "description": "API key for authentication. Not enforced in development and test environments."
                }
            },
            "schemas": {
                "User": user_schema,
                "CreateUserRequest": {
                    "type": "object",
                    "required": ["email", "name", "password"],
                    "properties": {
                        "email": { "type": "string", "format": "email" },
                        "name": { "type": "string" },
                        "password": { "type": "string" },
                        "role": { "type": "string", "enum": ["user", "admin", "read-only-admin"] }
                    }
                }
            }
        },
        "tags": [
            { "name": "General", "description": "General endpoints" },
            { "name": "Health", "description": "Health check endpoints" },
            { "name": "Configuration", "description": "Configuration introspection" },
            { "name": "Users", "description": "Mock user management" }
        ],
        "paths": {
            "/": {
                "get": {
                    "summary": "Greeting message",
                    "tags": ["General"],
                    "responses": {
                        "200": {
                            "description": "The configured greeting",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        }
                    }
                }
            },
            "/healthz": {
                "get": {
                    "summary": "Liveness probe",
                    "tags": ["Health"],
                    "responses": {
                        "200": {
                            "description": "Service is alive",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "status": { "type": "string", "example": "ok" } }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/readyz": {
                "get": {
                    "summary": "Readiness probe",
                    "tags": ["Health"],
                    "responses": {
                        "200": {
                            "description": "Service is ready to accept requests",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "status": { "type": "string", "example": "ready" } }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/metrics": {
                "get": {
                    "summary": "Prometheus metrics",
                    "tags": ["General"],
                    "responses": {
                        "200": {
                            "description": "Prometheus exposition text",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        }
                    }
                }
            },
            "/config": {
                "get": {
                    "summary": "Current configuration",
                    "tags": ["Configuration"],
                    "security": [{ "ApiKeyAuth": [] }],
                    "responses": {
                        "200": {
                            "description": "Configuration values",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "APP_GREETING": { "type": "string" },
                                            "API_KEY": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        },
                        "401": error_response("Authorization failure")
                    }
                }
            },
            "/api/users": {
                "get": {
                    "summary": "List users",
                    "tags": ["Users"],
                    "security": [{ "ApiKeyAuth": [] }],
                    "parameters": [
                        {
                            "in": "query",
                            "name": "page",
                            "schema": { "type": "integer", "minimum": 1, "default": 1 }
                        },
                        {
                            "in": "query",
                            "name": "limit",
                            "schema": { "type": "integer", "minimum": 1, "maximum": 100, "default": 10 }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "User list with pagination metadata",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "users": { "type": "array", "items": { "$ref": "#/components/schemas/User" } },
                                            "pagination": {
                                                "type": "object",
                                                "properties": {
                                                    "page": { "type": "integer" },
                                                    "limit": { "type": "integer" },
                                                    "total": { "type": "integer" },
                                                    "totalPages": { "type": "integer" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        "401": error_response("Authorization failure")
                    }
                },
                "post": {
                    "summary": "Create a user",
                    "tags": ["Users"],
                    "security": [{ "ApiKeyAuth": [] }],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/CreateUserRequest" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created user record",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/User" } }
                            }
                        },
                        "400": error_response("Validation failure"),
                        "401": error_response("Authorization failure")
                    }
                }
            },
            "/api/users/{userId}": {
                "parameters": [
                    {
                        "in": "path",
                        "name": "userId",
                        "required": true,
                        "schema": { "type": "string" }
                    }
                ],
                "get": {
                    "summary": "Get a user",
                    "tags": ["Users"],
                    "security": [{ "ApiKeyAuth": [] }],
                    "responses": {
                        "200": {
                            "description": "User record",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/User" } }
                            }
                        },
                        "401": error_response("Authorization failure")
                    }
                },
                "put": {
                    "summary": "Update a user",
                    "tags": ["Users"],
                    "security": [{ "ApiKeyAuth": [] }],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "name": { "type": "string" },
                                        "role": { "type": "string", "enum": ["user", "admin", "read-only-admin"] }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Updated user record",
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/User" } }
                            }
                        },
                        "401": error_response("Authorization failure")
                    }
                },
                "delete": {
                    "summary": "Delete a user",
                    "tags": ["Users"],
                    "security": [{ "ApiKeyAuth": [] }],
                    "responses": {
                        "204": { "description": "Deleted" },
                        "401": error_response("Authorization failure")
                    }
                }
            }
        }
    })
}

const SWAGGER_UI_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>API Documentation</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.15.5/swagger-ui.min.css" />
  <style>.swagger-ui .topbar { display: none }</style>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.15.5/swagger-ui-bundle.min.js"></script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.15.5/swagger-ui-standalone-preset.min.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: '/api-docs/swagger.json',
        dom_id: '#swagger-ui',
        docExpansion: 'list',
        filter: true,
        presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
        layout: 'BaseLayout',
      });
    };
  </script>
</body>
</html>
"#;
