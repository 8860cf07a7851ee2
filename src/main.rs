use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use research_agent::{
    cli::Cli,
    configuration::get_configuration,
    services::SerpApiClient,
    startup::{run, ResearchError},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let configuration = get_configuration().context("Failed to read configuration.")?;

    env_logger::Builder::from_env(
        Env::default().default_filter_or(configuration.log_level.as_str()),
    )
    .init();

    let mut stdout = std::io::stdout();
    run(
        &cli,
        configuration.api_key(),
        |api_key| -> Result<SerpApiClient, ResearchError> {
            Ok(SerpApiClient::new(api_key, configuration.base_url()?))
        },
        &mut stdout,
    )
    .await?;

    Ok(())
}
