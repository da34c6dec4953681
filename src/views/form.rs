use std::fmt::Write;

use super::{escape_opt, page};
use crate::models::{DispatchField, DispatchRecord};

/// Entry form. With a record it is pre-filled and posts to `/update/{id}`,
/// otherwise it is blank and posts to `/submit`.
pub fn render_form(record: Option<&DispatchRecord>) -> String {
    let (title, heading, action, button) = match record {
        Some(r) => (
            "Edit Record",
            "Edit Record",
            format!("/update/{}", r.id),
            "Update Record",
        ),
        None => (
            "New Dispatch",
            "Dispatch Form",
            "/submit".to_string(),
            "Save Record",
        ),
    };

    let mut inputs = String::new();
    for field in DispatchField::ALL {
        let value = escape_opt(record.and_then(|r| r.fields.value(field)));
        let required = if field.is_required() { " required" } else { "" };
        let _ = write!(
            inputs,
            "      <label for=\"{name}\">{label}:</label>\n      <input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{required}>\n\n",
            name = field.name(),
            label = field.label(),
            kind = field.input_type(),
            value = value,
            required = required,
        );
    }

    let body = format!(
        "  <div class=\"container\">\n    <h1>{heading}</h1>\n    <form method=\"POST\" action=\"{action}\">\n{inputs}      <button type=\"submit\">{button}</button>\n      <a href=\"/records\" class=\"button\">Back</a>\n    </form>\n  </div>",
        heading = heading,
        action = action,
        inputs = inputs,
        button = button,
    );
    page(title, None, &body)
}
