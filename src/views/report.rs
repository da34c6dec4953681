use std::fmt::Write;

use super::{escape_opt, page};
use crate::models::{DispatchField, DispatchRecord};

/// A4 print layout for one record. Used for both view and print.
pub fn render_report(record: &DispatchRecord) -> String {
    let mut rows = String::new();
    for field in DispatchField::ALL {
        let _ = writeln!(
            rows,
            "      <tr><th>{}:</th><td>{}</td></tr>",
            field.label(),
            escape_opt(record.fields.value(field)),
        );
    }

    let body = format!(
        "  <div class=\"print-header\">\n    <h2>Office of Transport Management</h2>\n    <p>Kathmandu, Nepal</p>\n    <hr>\n  </div>\n  <div class=\"report-body\">\n    <h3>Dispatch Report</h3>\n    <table class=\"report-table\">\n{}    </table>\n    <div class=\"signature\">\n      <p>Officer Signature: ______________________</p>\n    </div>\n  </div>",
        rows
    );
    page("Dispatch Report", Some("a4page"), &body)
}
