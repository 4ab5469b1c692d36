//! Page composition module
//!
//! One generic handler renders every page: read the route's fragments,
//! register each under its slot name in a fresh Tera instance, then render
//! the layout with an empty context. Rendering is data-free, so a route
//! produces byte-identical output on every request.

use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::routes::{Route, LAYOUT_SLOT};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tera::{Context, Tera};
use thiserror::Error;

/// What can go wrong while producing a page. `Read` and `Parse` are
/// composition errors, `Render` is an execution error; all three surface to
/// the client as the same generic 500.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read template '{file}': {source}")]
    Read {
        file: &'static str,
        source: std::io::Error,
    },
    #[error("failed to parse templates: {0}")]
    Parse(#[source] tera::Error),
    #[error("failed to render page: {0}")]
    Render(#[source] tera::Error),
}

/// Serve a page route
pub async fn serve(
    ctx: &RequestContext<'_>,
    cfg: &crate::config::Config,
    route: &Route,
) -> Response<Full<Bytes>> {
    match render_page(&cfg.ui.templates_dir, route).await {
        Ok(html) => http::response::build_html_response(html, ctx.is_head),
        Err(err) => {
            logger::log_error(&err.to_string());
            http::build_500_response()
        }
    }
}

/// Compose and execute a route's fragments into the final HTML.
///
/// The whole page is buffered before anything is written, so a render
/// failure yields a clean 500 instead of a truncated 200.
pub async fn render_page(templates_dir: &str, route: &Route) -> Result<String, PageError> {
    let tera = compose(templates_dir, route).await?;
    tera.render(LAYOUT_SLOT, &Context::new())
        .map_err(PageError::Render)
}

/// Load every fragment and register it under its slot name.
async fn compose(templates_dir: &str, route: &Route) -> Result<Tera, PageError> {
    let mut sources = Vec::with_capacity(route.fragments.len());
    for fragment in route.fragments {
        let path = Path::new(templates_dir).join(fragment.file);
        let source = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| PageError::Read {
                file: fragment.file,
                source,
            })?;
        sources.push((fragment.slot, source));
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(sources).map_err(PageError::Parse)?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{Fragment, MAIN_SLOT};
    use std::fs;

    const LAYOUT_SRC: &str = "<html><body>{% include \"main\" %}</body></html>";

    fn test_route() -> Route {
        Route {
            path: "/",
            fragments: &[
                Fragment {
                    slot: LAYOUT_SLOT,
                    file: "layout.html",
                },
                Fragment {
                    slot: MAIN_SLOT,
                    file: "page.html",
                },
            ],
        }
    }

    #[tokio::test]
    async fn renders_layout_around_fragment() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("layout.html"), LAYOUT_SRC).unwrap();
        fs::write(dir.path().join("page.html"), "<p>hello</p>").unwrap();

        let html = render_page(dir.path().to_str().unwrap(), &test_route())
            .await
            .unwrap();
        assert_eq!(html, "<html><body><p>hello</p></body></html>");
    }

    #[tokio::test]
    async fn missing_fragment_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("layout.html"), LAYOUT_SRC).unwrap();

        let err = render_page(dir.path().to_str().unwrap(), &test_route())
            .await
            .unwrap_err();
        assert!(matches!(err, PageError::Read { file: "page.html", .. }));
    }

    #[tokio::test]
    async fn malformed_fragment_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("layout.html"), LAYOUT_SRC).unwrap();
        fs::write(dir.path().join("page.html"), "{% include").unwrap();

        let err = render_page(dir.path().to_str().unwrap(), &test_route())
            .await
            .unwrap_err();
        assert!(matches!(err, PageError::Parse(_)));
    }

    #[tokio::test]
    async fn undefined_slot_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("layout.html"),
            "<html>{% include \"nonexistent\" %}</html>",
        )
        .unwrap();
        fs::write(dir.path().join("page.html"), "<p>hello</p>").unwrap();

        let err = render_page(dir.path().to_str().unwrap(), &test_route())
            .await
            .unwrap_err();
        assert!(matches!(err, PageError::Render(_)));
    }
}
