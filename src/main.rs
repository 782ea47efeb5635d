use clap::Parser;
use questlog::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "questlog", about = "Terminal RPG quest dashboard")]
struct Args {
    /// Path to an alternate config file (default: ~/.questlog/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Experience required to fill the level bar
    #[arg(long)]
    max_experience: Option<u32>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to questlog.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("questlog.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Questlog starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.max_experience);

    questlog::tui::run(resolved)
}
