use clap::Parser;
use prism::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prism", about = "Interactive drill-down inspector for module catalogs")]
struct Args {
    /// Path to a catalog JSON file (overrides the config file)
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to prism.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("prism.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable ({}), falling back to defaults", e);
        config::PrismConfig::default()
    });
    let resolved = config::resolve(file_config, args.catalog);

    log::info!("Prism starting up (catalog: {:?})", resolved.catalog_path);

    prism::tui::run(resolved)
}
