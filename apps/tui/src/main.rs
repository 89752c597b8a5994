use clap::Parser;
use color_eyre::Result;
use covid_india_dashboard::app::App;
use covid_india_dashboard::cli::CliArgs;
use covid_india_dashboard::config::init_app_config;
use covid_india_dashboard::logging::init_logging;
use covid_india_dashboard::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let headless = args.headless || !is_terminal();
    init_logging(&config, headless)?;

    let mut app = App::new(config.endpoint.clone());

    if headless {
        return event::run_headless(&mut app, args.json).await;
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
