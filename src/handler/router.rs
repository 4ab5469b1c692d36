//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, static-prefix
//! dispatch, exact route matching.

use crate::config::Config;
use crate::handler::{pages, static_files};
use crate::http;
use crate::logger;
use crate::routes;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating what the handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body, which is never read; only method and path
/// drive the dispatch.
pub async fn handle_request<B>(
    req: Request<B>,
    cfg: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();

    if cfg.logging.access_log {
        logger::log_request(method, path);
    }

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path,
        is_head: *method == Method::HEAD,
    };

    Ok(route_request(&ctx, &cfg).await)
}

/// Reject anything but GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path: static mount first, then exact page routes
async fn route_request(ctx: &RequestContext<'_>, cfg: &Config) -> Response<Full<Bytes>> {
    // 1. Static asset mount (prefix match)
    let prefix = cfg.ui.static_prefix.trim_end_matches('/');
    if let Some(rest) = ctx.path.strip_prefix(prefix) {
        if rest.starts_with('/') {
            return static_files::serve(ctx, cfg, rest).await;
        }
    }

    // 2. Page routes (exact match)
    if let Some(route) = routes::find(ctx.path) {
        return pages::serve(ctx, cfg, route).await;
    }

    // 3. Anything else, including path remnants under "/"
    http::build_404_response()
}
