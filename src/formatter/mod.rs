//! Response presentation.
//!
//! Non-empty bodies are already pretty-printed by the executor and are shown
//! as they are. A response without a body is summarized as a one-line JSON
//! object carrying the status code and a short message.

pub mod json;

pub use json::{format_json_compact, format_json_pretty};

use crate::models::Response;
use std::io::{self, Write};

/// How a response body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Indented, multi-line JSON.
    #[default]
    Pretty,
    /// Single-line JSON.
    Compact,
}

/// Message shown for a response that carried no body.
pub fn status_message(status_code: u16) -> &'static str {
    match status_code {
        404 => "request error",
        500 => "server error",
        200 | 201 => "no response body",
        _ => "",
    }
}

/// Renders a response for display using the pretty style.
///
/// # Examples
///
/// ```
/// use kelpie::formatter::render;
/// use kelpie::models::Response;
///
/// let line = render(&Response::empty(404));
/// assert_eq!(line, r#"{"code": 404, "body": "request error"}"#);
/// ```
pub fn render(response: &Response) -> String {
    render_with(response, OutputStyle::Pretty)
}

/// Renders a response for display in the given style.
pub fn render_with(response: &Response, style: OutputStyle) -> String {
    if response.is_empty() {
        return format!(
            "{{\"code\": {}, \"body\": \"{}\"}}",
            response.status_code,
            status_message(response.status_code)
        );
    }

    match (style, &response.json) {
        (OutputStyle::Compact, Some(value)) => {
            format_json_compact(value).unwrap_or_else(|_| response.body.clone())
        }
        _ => response.body.clone(),
    }
}

/// Writes the rendered response, followed by a newline.
pub fn write_response<W: Write>(
    out: &mut W,
    response: &Response,
    style: OutputStyle,
) -> io::Result<()> {
    writeln!(out, "{}", render_with(response, style))
}
