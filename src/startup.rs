use std::io::Write;

use crate::{
    cli::Cli,
    domain::report::ResearchReport,
    services::{company_lookup, job_lookup, SearchBackend, SearchError},
};

pub const MISSING_API_KEY_MESSAGE: &str =
    "Error: SERPAPI_KEY not found. Make sure you have created a .env file with your API key.";

#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("invalid search api url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the company lookup, then the job lookup, and writes the report to `out`.
/// Without an api key only the missing-key message is written and `connect`
/// is never called, so backend settings are not even validated.
pub async fn run<B, F, W>(
    cli: &Cli,
    api_key: Option<&str>,
    connect: F,
    out: &mut W,
) -> Result<(), ResearchError>
where
    B: SearchBackend,
    F: FnOnce(String) -> Result<B, ResearchError>,
    W: Write,
{
    let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
        writeln!(out, "{}", MISSING_API_KEY_MESSAGE)?;
        return Ok(());
    };

    let backend = connect(api_key.to_string())?;

    let company = company_lookup::lookup(&backend, &cli.company_name).await?;
    let job = job_lookup::lookup(&backend, &cli.company_name, &cli.job_role).await?;

    let report = ResearchReport {
        company_name: &cli.company_name,
        job_role: &cli.job_role,
        company: &company,
        job: &job,
    };
    write!(out, "{}", report)?;
    out.flush()?;

    Ok(())
}
