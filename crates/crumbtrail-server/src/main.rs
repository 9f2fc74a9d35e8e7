mod config;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use crumbtrail::{generate_breadcrumbs, Breadcrumb};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    info!(
        "Breadcrumb labels: {} explicit, dynamic template: {:?}",
        config.routes.labels.len(),
        config.routes.dynamic
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(config);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/*path", get(page_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}

async fn index_handler(State(config): State<Arc<Config>>, headers: HeaderMap) -> Response {
    respond(&config, "/", &headers)
}

async fn page_handler(
    State(config): State<Arc<Config>>,
    axum::extract::Path(path): axum::extract::Path<String>,
    headers: HeaderMap,
) -> Response {
    let route = format!("/{}", path);
    respond(&config, &route, &headers)
}

/// Render the page for a request path, or its breadcrumb trail as JSON
/// when the client asks for it.
fn respond(config: &Config, path: &str, headers: &HeaderMap) -> Response {
    let items = generate_breadcrumbs(path, &config.routes);

    // Content negotiation: JSON response
    if accepts_json(headers) {
        return Json(items).into_response();
    }

    let title = items
        .last()
        .map(|item| item.label.as_str().to_string())
        .unwrap_or_else(|| "Home".to_string());

    let trail = Breadcrumb::new()
        .items(items)
        .separator(config.breadcrumb.separator.as_str())
        .class_name(config.breadcrumb.class_name.clone())
        .show_home(config.breadcrumb.show_home);

    let markup = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                header { (trail) }
                main {
                    h1 { (title) }
                    p { "You are here: " code { (path) } }
                }
            }
        }
    };

    Html(markup.into_string()).into_response()
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_accept(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_accepts_json() {
        assert!(accepts_json(&headers_with_accept("application/json")));
        assert!(accepts_json(&headers_with_accept("text/html, application/json;q=0.9")));
        assert!(!accepts_json(&headers_with_accept("text/html")));
        assert!(!accepts_json(&HeaderMap::new()));
    }

    #[test]
    fn test_respond_renders_trail_for_path() {
        let config = Config::default();
        let response = respond(&config, "/users/42", &HeaderMap::new());
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
