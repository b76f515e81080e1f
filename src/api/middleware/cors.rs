//! Cross-origin resource sharing policy.

use tower_http::cors::{Any, CorsLayer};

/// Allows every origin, method and header, without credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}
