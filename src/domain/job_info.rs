pub const NO_JOB_POSTINGS: &str = "Could not find any job postings for this role.";
pub const NO_JOB_DESCRIPTION: &str = "No description found.";
pub const SALARY_NOT_FOUND: &str = "Not found";
pub const SALARY_NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInfo {
    pub summary: String,
    pub salary: String,
}

impl JobInfo {
    /// No posting could be read, `summary` says why.
    pub fn not_found(summary: impl Into<String>) -> Self {
        JobInfo {
            summary: summary.into(),
            salary: SALARY_NOT_FOUND.to_string(),
        }
    }
}
