use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "covid-dashboard",
    version,
    about = "Covid-19 in India: state-level tracker dashboard"
)]
pub struct CliArgs {
    /// Print the summary and top states, then exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the stats endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the log file used while the TUI is running
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(endpoint) = &self.endpoint {
            std::env::set_var("COVID_API_URL", endpoint);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("DASHBOARD_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_json_flags() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "covid-dashboard",
            "--headless",
            "--json",
            "--endpoint",
            "http://localhost:9000/latest",
        ])?;

        assert!(args.headless);
        assert!(args.json);
        assert!(!args.debug);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:9000/latest"));
        Ok(())
    }

    #[test]
    fn defaults_to_interactive() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from(["covid-dashboard"])?;
        assert!(!args.headless);
        assert!(args.log_file.is_none());
        Ok(())
    }
}
