use token_verify::config::{self, Config};
use token_verify::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Tracing is configured from the loaded config, so report failures directly
    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error al cargar la aplicación: {e:#}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
