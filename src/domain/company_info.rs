pub const NO_DESCRIPTION: &str = "No company description found.";
pub const NO_NEWS: &str = "No recent news found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    pub description: String,
    /// Up to three `- <title>. [Source: <source>]` lines.
    pub news: String,
}
