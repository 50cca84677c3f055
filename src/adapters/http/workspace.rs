//! Canonical workspace pages, rendered inside the workspace layout.

use crate::adapters::http::views::{escape_html, workspace_layout};
use axum::extract::Path;
use axum::response::Html;

/// `GET /{organization_id}/{division_id}/workspace`
pub async fn workspace_root(
    Path((organization_id, division_id)): Path<(String, String)>,
) -> Html<String> {
    render(&organization_id, &division_id, "")
}

/// `GET /{organization_id}/{division_id}/workspace/{*rest}`
pub async fn workspace_page(
    Path((organization_id, division_id, rest)): Path<(String, String, String)>,
) -> Html<String> {
    render(&organization_id, &division_id, &rest)
}

fn render(organization_id: &str, division_id: &str, rest: &str) -> Html<String> {
    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let section = segments.next().unwrap_or("home");
    let item = segments.next();

    let title = match (section, item) {
        ("channels", Some(id)) => format!("Channel {}", id),
        ("projects", Some(id)) => format!("Project {}", id),
        (section, _) => section.to_string(),
    };

    let content = format!(
        "<nav class=\"breadcrumb\">{} / {}</nav><h1>{}</h1>",
        escape_html(organization_id),
        escape_html(division_id),
        escape_html(&title)
    );
    Html(workspace_layout(&title, &content))
}
