use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::form::FormState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub state: &'a FormState,
}

/// Renders the whole page for the given form state. Dynamic text is HTML-escaped.
pub fn render_page(state: &FormState) -> Response {
    match (IndexPage { state }).render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(state: &FormState) -> String {
        IndexPage { state }.render().unwrap()
    }

    #[test]
    fn idle_page_has_form_and_explainer_only() {
        let page = html(&FormState::new());

        assert!(page.contains(">Summarize</button>"));
        assert!(!page.contains("disabled>"));
        assert!(!page.contains("role=\"alert\""));
        assert!(!page.contains("<h2>Summary</h2>"));
        assert!(page.contains("1. Input URL"));
        assert!(page.contains("2. Process"));
        assert!(page.contains("3. Summary"));
    }

    #[test]
    fn loading_page_disables_the_button() {
        let state = FormState { is_loading: true, ..FormState::default() };
        let page = html(&state);

        assert!(page.contains("disabled>Processing...</button>"));
        assert!(!page.contains(">Summarize</button>"));
    }

    #[test]
    fn error_panel_shows_message() {
        let state = FormState {
            url: "example.com".into(),
            error: "Please enter a valid URL".into(),
            ..FormState::default()
        };
        let page = html(&state);

        assert!(page.contains("role=\"alert\">Please enter a valid URL</div>"));
        assert!(page.contains("value=\"example.com\""));
    }

    #[test]
    fn summary_keeps_line_breaks_and_is_escaped() {
        let state = FormState {
            summary: "First line\n\n  <b>second</b>".into(),
            ..FormState::default()
        };
        let page = html(&state);

        assert!(page.contains("<h2>Summary</h2>"));
        assert!(page.contains("First line\n\n  &lt;b&gt;second&lt;"));
        assert!(!page.contains("<b>second"));
    }
}
