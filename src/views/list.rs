use std::fmt::Write;

use super::{escape_opt, page};
use crate::models::DispatchRecord;

pub fn render_list(records: &[DispatchRecord]) -> String {
    let mut rows = String::new();
    for r in records {
        let _ = write!(
            rows,
            "        <tr>\n          <td>{id}</td>\n          <td>{dispatch_no}</td>\n          <td>{name}</td>\n          <td>{license_no}</td>\n          <td>{nepali_date}</td>\n          <td>\n            <a href=\"/record/{id}\" target=\"_blank\">View</a> |\n            <a href=\"/edit/{id}\">Edit</a> |\n            <a href=\"/print/{id}\" target=\"_blank\">Print</a>\n          </td>\n        </tr>\n",
            id = r.id,
            dispatch_no = escape_opt(r.fields.dispatch_no.as_deref()),
            name = escape_opt(r.fields.name.as_deref()),
            license_no = escape_opt(r.fields.license_no.as_deref()),
            nepali_date = escape_opt(r.fields.today_nepali_date.as_deref()),
        );
    }

    let body = format!(
        "  <div class=\"container\">\n    <h1>All Dispatch Records</h1>\n    <a href=\"/\" class=\"button\">+ New Dispatch</a>\n    <table>\n      <thead>\n        <tr>\n          <th>ID</th><th>Dispatch No</th><th>Name</th><th>License No</th><th>Nepali Date</th><th>Actions</th>\n        </tr>\n      </thead>\n      <tbody>\n{}      </tbody>\n    </table>\n  </div>",
        rows
    );
    page("All Dispatch Records", None, &body)
}
