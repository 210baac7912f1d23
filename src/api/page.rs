use axum::{
    http::header,
    response::{Html, IntoResponse},
};

/// Serve the converter page
pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn handle_style() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/doticon.css"),
    )
}

pub async fn handle_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../static/doticon.js"),
    )
}
