use clap::Parser;
use url_shrinker::config::{self, Config, StoreBackend};
use url_shrinker::server;

/// URL shrinker HTTP service.
#[derive(Parser)]
#[command(name = "url-shrinker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keep entries in process memory instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_with_backend(cli.in_memory.then_some(StoreBackend::Memory))?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber from the loaded log level and format.
fn init_tracing(config: &Config) {
    let subscriber = tracing_subscriber::fmt().with_env_filter(config.env_filter());
    if config.json_logs() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
