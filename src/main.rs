use money_formatter::{config::Config, logger, run::run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logger::init(&config.log_filter);

    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    run(std::io::stdin(), stdout.lock(), &config)?;

    Ok(())
}
