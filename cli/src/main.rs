//! CLI entrypoint for llm-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{CheckHealthUseCase, ClientState, CouncilGateway, SubmitQueryUseCase};
use council_domain::Theme;
use council_infrastructure::{ConfigLoader, FileConfig, HttpCouncilGateway, JsonFileStore};
use council_presentation::{
    Cli, ConsoleFormatter, HtmlReport, OutputFormat, StageReporter, StatusFormatter,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // === Dependency Injection ===
    let store = Arc::new(JsonFileStore::new(state_path()));
    let state = ClientState::new(store);

    if let Some(theme) = &cli.theme {
        let theme: Theme = theme.parse().context("Theme must be 'light' or 'dark'")?;
        state.set_theme(theme)?;
        println!("Theme set to {}", theme);
        return Ok(());
    }

    if cli.history {
        print_history(&state);
        return Ok(());
    }

    let gateway = Arc::new(HttpCouncilGateway::new(&config.server.base_url)?);

    if cli.status {
        return show_status(gateway, &config, cli.watch).await;
    }

    // Query mode - a query is required from here on
    let Some(query) = cli.query.as_deref() else {
        bail!("A query is required. See --help for other commands.");
    };

    info!("Using coordinator at {}", config.server.base_url);

    // Informational only; logged at debug level
    CheckHealthUseCase::new(Arc::clone(&gateway))
        .fetch_config()
        .await;

    if cli.single_call {
        return run_single_call(gateway, &state, query, &cli).await;
    }

    let use_case = SubmitQueryUseCase::new(Arc::clone(&gateway), state.clone());

    let run = if cli.quiet {
        use_case.execute(query).await
    } else {
        let progress = StageReporter::new();
        use_case.execute_with_progress(query, &progress).await
    };

    let run = match run {
        Ok(run) => run,
        Err(e) => bail!("{}", e),
    };

    // Let the success indicator land before the results scroll in
    if run.is_completed() && !cli.quiet {
        tokio::time::sleep(Duration::from_millis(1000)).await;
    }

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&run),
        OutputFormat::Final => ConsoleFormatter::format_final_only(&run),
        OutputFormat::Json => ConsoleFormatter::format_json(&run),
    };
    println!("{}", output);

    if let Some(path) = &cli.report {
        let html = HtmlReport::render(&run, state.theme());
        std::fs::write(path, html)
            .with_context(|| format!("Could not write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    if run.is_failed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Run the legacy combined endpoint; all three stages happen server-side
async fn run_single_call(
    gateway: Arc<HttpCouncilGateway>,
    state: &ClientState,
    query: &str,
    cli: &Cli,
) -> Result<()> {
    if query.trim().is_empty() {
        bail!("Please enter a query");
    }
    state.record_query(query);

    if !cli.quiet {
        println!("Submitting to council (single call, no stage progress)...");
    }

    let outcome = gateway
        .council(query)
        .await
        .context("Council workflow failed")?;

    println!("{}", ConsoleFormatter::format_outcome(&outcome));
    Ok(())
}

async fn show_status(
    gateway: Arc<HttpCouncilGateway>,
    config: &FileConfig,
    watch: bool,
) -> Result<()> {
    let use_case = CheckHealthUseCase::new(gateway);

    let status = use_case.execute().await;
    print!("{}", StatusFormatter::format(&status));

    if !watch {
        return Ok(());
    }

    // Fixed-interval polling for the life of the process; failed polls
    // degrade the badges and are never fatal
    let mut interval =
        tokio::time::interval(Duration::from_secs(config.server.health_interval_secs.max(1)));
    interval.tick().await; // first tick fires immediately; already polled
    loop {
        interval.tick().await;
        let status = use_case.execute().await;
        println!("---");
        print!("{}", StatusFormatter::format(&status));
    }
}

fn print_history(state: &ClientState) {
    let history = state.history();
    if history.is_empty() {
        println!("No queries recorded yet.");
        return;
    }

    for entry in history.entries() {
        println!("{}  {}", entry.timestamp, entry.query);
    }
}

fn state_path() -> PathBuf {
    JsonFileStore::default_path().unwrap_or_else(|| PathBuf::from(".llm-council-state.json"))
}
