use clap::Parser;
use parcel_registry::app::menu::CommandLoop;
use parcel_registry::core::ConfigProvider;
use parcel_registry::utils::{logger, validation::Validate};
use parcel_registry::{CliConfig, LocalStorage, Registry};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting parcel-registry");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.base_dir());
    let mut registry = match Registry::open(storage, config.data_file()) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("❌ Failed to load parcel store: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!(
        "📁 {} parcels loaded from {}",
        registry.parcels().len(),
        registry.data_file()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    CommandLoop::new(
        &mut registry,
        config.report_file(),
        stdin.lock(),
        stdout.lock(),
    )
    .run()?;

    tracing::info!("✅ Session finished");
    Ok(())
}
