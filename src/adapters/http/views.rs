//! Minimal HTML for the splash and the workspace layout.

use crate::domain::{EntityReference, ResolutionState};

/// Fixed loading indicator shared by every workspace route.
pub const LOADING_INDICATOR: &str = r#"<div class="loading-indicator" role="status" aria-live="polite"><span class="spinner"></span><span>Loading&hellip;</span></div>"#;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;padding:2rem;color:#1f2328}\
.workspace-loading:has(+ .workspace-content:not(:empty)){display:none}\
.splash{max-width:32rem;margin:4rem auto;text-align:center}";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{}</style></head><body>{}</body></html>",
        escape_html(title),
        STYLE,
        body
    )
}

/// Loading boundary around nested workspace content. `content` is trusted markup.
/// The indicator shows until the content section is non-empty.
pub fn workspace_layout(title: &str, content: &str) -> String {
    document(
        title,
        &format!(
            "<main class=\"workspace-layout\"><div class=\"workspace-loading\">{}</div>\
<section class=\"workspace-content\">{}</section></main>",
            LOADING_INDICATOR, content
        ),
    )
}

/// Page for one splash state.
pub fn splash_page(reference: &EntityReference, state: &ResolutionState) -> String {
    let kind = reference.entity_type.as_str();
    let (title, message) = match state {
        ResolutionState::Idle | ResolutionState::Resolving => {
            return document("Opening link", &format!("<div class=\"splash\">{}</div>", LOADING_INDICATOR));
        }
        ResolutionState::Redirecting { location } => {
            let path = escape_html(&location.workspace_path);
            return document(
                "Redirecting",
                &format!(
                    "<div class=\"splash\" data-state=\"redirecting\"><p>Redirecting to <a href=\"{0}\">{0}</a></p></div>",
                    path
                ),
            );
        }
        ResolutionState::NotFound => (
            "Not found",
            format!("This {} does not exist or has been removed.", kind),
        ),
        ResolutionState::Forbidden => (
            "Access denied",
            format!("You do not have access to this {}.", kind),
        ),
        ResolutionState::Error { .. } => (
            "Something went wrong",
            "We could not open this link. Reload the page to try again.".to_string(),
        ),
    };

    document(
        title,
        &format!(
            "<div class=\"splash\" data-state=\"{}\"><h1>{}</h1><p>{}</p></div>",
            state.name(),
            escape_html(title),
            escape_html(&message)
        ),
    )
}
