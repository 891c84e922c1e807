use anyhow::Result;
use clap::Parser;
use satire_server::app::Application;
use satire_server::config::Config;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "satire-server")]
#[command(about = "Serve satirical news articles generated from a headline")]
struct CliArgs {
    /// Port to listen on. Overrides the PORT environment variable.
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "satire_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting satire-server");

    let args = CliArgs::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    let app = match Application::build(config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    app.run_until_stopped().await?;
    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_port_flag() {
        let args = CliArgs::try_parse_from(["satire-server", "--port", "9000"]).unwrap();
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_port_flag_optional() {
        let args = CliArgs::try_parse_from(["satire-server"]).unwrap();
        assert_eq!(args.port, None);
    }

    #[test]
    fn test_port_flag_rejects_non_numeric() {
        assert!(CliArgs::try_parse_from(["satire-server", "--port", "http"]).is_err());
    }
}
