use std::fmt;

use super::{CompanyInfo, JobInfo};

pub const SUMMARY_DISPLAY_CHARS: usize = 1500;
const RULE_WIDTH: usize = 50;

pub struct ResearchReport<'a> {
    pub company_name: &'a str,
    pub job_role: &'a str,
    pub company: &'a CompanyInfo,
    pub job: &'a JobInfo,
}

/// First `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl fmt::Display for ResearchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Research Report: {} - {}", self.company_name, self.job_role)?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        writeln!(f, "--- Company Overview ---")?;
        writeln!(f, "{}", self.company.description)?;
        writeln!(f)?;
        writeln!(f, "--- Latest News ---")?;
        writeln!(f, "{}", self.company.news)?;

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        writeln!(f, "--- Role-Specific Requirements (from first job found) ---")?;
        writeln!(f)?;
        writeln!(f, "SALARY:  {}", self.job.salary)?;
        writeln!(f)?;
        writeln!(f, "JOB DESCRIPTION SUMMARY:")?;
        writeln!(f)?;
        writeln!(
            f,
            "{}...",
            truncate_chars(&self.job.summary, SUMMARY_DISPLAY_CHARS)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", rule)
    }
}
