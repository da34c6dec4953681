//! Server-side HTML rendering.
//!
//! Pages are built as strings. Every stored value passes through
//! [`escape`] before it reaches the markup.

mod form;
mod list;
mod report;

pub use form::render_form;
pub use list::render_list;
pub use report::render_report;

/// Served at [`STYLESHEET_PATH`].
pub const STYLESHEET: &str = include_str!("style.css");

pub const STYLESHEET_PATH: &str = "/static/style.css";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_opt(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_default()
}

/// Wraps a page body in the shared document shell.
fn page(title: &str, body_class: Option<&str>, body: &str) -> String {
    let body_open = match body_class {
        Some(class) => format!("<body class=\"{}\">", class),
        None => "<body>".to_string(),
    };
    format!(
        "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>{title}</title>\n  <link rel=\"stylesheet\" href=\"{css}\">\n</head>\n{body_open}\n{body}\n</body>\n</html>\n",
        title = escape(title),
        css = STYLESHEET_PATH,
        body_open = body_open,
        body = body,
    )
}

pub fn render_error(title: &str, message: &str) -> String {
    let body = format!(
        "  <div class=\"container\">\n    <h1>{}</h1>\n    <p>{}</p>\n    <a href=\"/records\" class=\"button\">All Records</a>\n  </div>",
        escape(title),
        escape(message)
    );
    page(title, None, &body)
}
