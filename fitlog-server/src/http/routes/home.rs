//! Static homepage

use axum::response::Html;
use axum::routing::get;
use axum::Router;

/// Homepage document, embedded at build time so the binary ships alone.
const HOMEPAGE: &str = include_str!("../../../assets/index.html");

/// GET / - the exercise tracker form page
async fn homepage() -> Html<&'static str> {
    Html(HOMEPAGE)
}

/// Homepage route
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(homepage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn homepage_embeds_the_tracker_form() {
        let Html(body) = homepage().await;
        assert!(body.contains("Exercise Tracker"));
        assert!(body.contains("/api/users"));
    }
}
