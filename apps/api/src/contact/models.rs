use serde::Deserialize;

/// Raw form payload as posted by the website. Field names mirror the
/// frontend's camelCase JSON; missing optional fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub school_name: String,
    pub city: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub preferred_date: String,
    pub message: String,
}

/// A validated demo-request submission. Only `validation::validate`
/// constructs this: fields are trimmed and the phone is normalized to its
/// bare 10-digit form. Transient: its only destination is an email body.
#[derive(Debug, Clone)]
pub struct Submission {
    pub school_name: String,
    pub city: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub preferred_date: String,
    pub message: String,
}
