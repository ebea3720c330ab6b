use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use shared_models::error::AppError;

/// Renders an askama template as an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => AppError::Template(e.to_string()).into_response(),
        }
    }
}

/// One `<option>` of a rendered `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, current: &str) -> Self {
        let value = value.into();
        let selected = value.eq_ignore_ascii_case(current.trim());
        Self { value, label: label.into(), selected }
    }
}
