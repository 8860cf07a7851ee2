use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "research_agent",
    about = "A research agent to find company and job role information.",
    version
)]
pub struct Cli {
    /// The name of the company to research.
    pub company_name: String,
    /// The job role to look for.
    pub job_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_positionals() {
        let cli = Cli::try_parse_from(["research_agent", "Acme Corp", "Staff Engineer"]).unwrap();
        assert_eq!(cli.company_name, "Acme Corp");
        assert_eq!(cli.job_role, "Staff Engineer");
    }

    #[test]
    fn job_role_is_required() {
        assert!(Cli::try_parse_from(["research_agent", "Acme"]).is_err());
    }
}
