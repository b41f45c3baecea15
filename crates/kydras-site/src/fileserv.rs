//! Fallback for paths the router does not know
//!
//! Files under `site_root` (the hydration bundle, copied assets) are served
//! as-is. Anything else renders the app shell with a 404 status.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    let root = options.site_root.clone();
    match get_static_file(uri, &root).await {
        Ok(res) if res.status().is_success() => res,
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(options, App);
            let mut res = handler(req).await.into_response();
            *res.status_mut() = StatusCode::NOT_FOUND;
            res
        }
        Err(status) => status.into_response(),
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => match err {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_root(root: &std::path::Path) -> LeptosOptions {
        LeptosOptions::builder()
            .output_name("kydras-site")
            .site_root(root.to_string_lossy().into_owned())
            .build()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_serves_file_from_site_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("pkg")).unwrap();
        std::fs::write(dir.path().join("pkg").join("kydras-site.js"), "export {}").unwrap();

        let res = file_and_error_handler(
            "/pkg/kydras-site.js".parse().unwrap(),
            State(options_with_root(dir.path())),
            get("/pkg/kydras-site.js"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_file_renders_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let res = file_and_error_handler(
            "/nope".parse().unwrap(),
            State(options_with_root(dir.path())),
            get("/nope"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
