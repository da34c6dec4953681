use serde::Deserialize;
use sqlx::FromRow;

/// Editable fields of a dispatch record, as submitted by the entry form.
///
/// The form body is read as raw key/value pairs: absent keys stay `None` and
/// are stored as NULL, repeated keys keep their first value, unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct DispatchFields {
    pub dispatch_no: Option<String>,
    pub today_nepali_date: Option<String>,
    pub subject: Option<String>,
    pub license_no: Option<String>,
    pub name: Option<String>,
    pub nagrita_no: Option<String>,
    pub father_name: Option<String>,
    pub dob: Option<String>,
    pub issue_date: Option<String>,
    pub expire_date: Option<String>,
    pub license_category: Option<String>,
}

impl From<Vec<(String, String)>> for DispatchFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut fields = DispatchFields::default();
        for (key, value) in pairs {
            if let Some(field) = DispatchField::from_name(&key) {
                fields.slot_mut(field).get_or_insert(value);
            }
        }
        fields
    }
}

impl DispatchFields {
    pub fn value(&self, field: DispatchField) -> Option<&str> {
        let value = match field {
            DispatchField::DispatchNo => &self.dispatch_no,
            DispatchField::TodayNepaliDate => &self.today_nepali_date,
            DispatchField::Subject => &self.subject,
            DispatchField::LicenseNo => &self.license_no,
            DispatchField::Name => &self.name,
            DispatchField::NagritaNo => &self.nagrita_no,
            DispatchField::FatherName => &self.father_name,
            DispatchField::Dob => &self.dob,
            DispatchField::IssueDate => &self.issue_date,
            DispatchField::ExpireDate => &self.expire_date,
            DispatchField::LicenseCategory => &self.license_category,
        };
        value.as_deref()
    }

    fn slot_mut(&mut self, field: DispatchField) -> &mut Option<String> {
        match field {
            DispatchField::DispatchNo => &mut self.dispatch_no,
            DispatchField::TodayNepaliDate => &mut self.today_nepali_date,
            DispatchField::Subject => &mut self.subject,
            DispatchField::LicenseNo => &mut self.license_no,
            DispatchField::Name => &mut self.name,
            DispatchField::NagritaNo => &mut self.nagrita_no,
            DispatchField::FatherName => &mut self.father_name,
            DispatchField::Dob => &mut self.dob,
            DispatchField::IssueDate => &mut self.issue_date,
            DispatchField::ExpireDate => &mut self.expire_date,
            DispatchField::LicenseCategory => &mut self.license_category,
        }
    }
}

/// A stored row of the `dispatches` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DispatchRecord {
    pub id: i64,
    #[sqlx(flatten)]
    pub fields: DispatchFields,
    pub created_at: Option<String>,
}

/// The editable columns, in form and report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchField {
    DispatchNo,
    TodayNepaliDate,
    Subject,
    LicenseNo,
    Name,
    NagritaNo,
    FatherName,
    Dob,
    IssueDate,
    ExpireDate,
    LicenseCategory,
}

impl DispatchField {
    pub const ALL: [DispatchField; 11] = [
        DispatchField::DispatchNo,
        DispatchField::TodayNepaliDate,
        DispatchField::Subject,
        DispatchField::LicenseNo,
        DispatchField::Name,
        DispatchField::NagritaNo,
        DispatchField::FatherName,
        DispatchField::Dob,
        DispatchField::IssueDate,
        DispatchField::ExpireDate,
        DispatchField::LicenseCategory,
    ];

    /// Column name, also used as the form input name.
    pub fn name(self) -> &'static str {
        match self {
            DispatchField::DispatchNo => "dispatch_no",
            DispatchField::TodayNepaliDate => "today_nepali_date",
            DispatchField::Subject => "subject",
            DispatchField::LicenseNo => "license_no",
            DispatchField::Name => "name",
            DispatchField::NagritaNo => "nagrita_no",
            DispatchField::FatherName => "father_name",
            DispatchField::Dob => "dob",
            DispatchField::IssueDate => "issue_date",
            DispatchField::ExpireDate => "expire_date",
            DispatchField::LicenseCategory => "license_category",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            DispatchField::DispatchNo => "Dispatch No",
            DispatchField::TodayNepaliDate => "Today (Nepali Date)",
            DispatchField::Subject => "Subject",
            DispatchField::LicenseNo => "License No",
            DispatchField::Name => "Name",
            DispatchField::NagritaNo => "Nagrita No",
            DispatchField::FatherName => "Father Name",
            DispatchField::Dob => "Date of Birth",
            DispatchField::IssueDate => "Issue Date",
            DispatchField::ExpireDate => "Expire Date",
            DispatchField::LicenseCategory => "License Category",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            DispatchField::Dob | DispatchField::IssueDate | DispatchField::ExpireDate => "date",
            _ => "text",
        }
    }

    /// Enforced by the browser only.
    pub fn is_required(self) -> bool {
        matches!(self, DispatchField::DispatchNo | DispatchField::TodayNepaliDate)
    }
}
