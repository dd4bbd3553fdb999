use clap::Parser;
use quiz_tui::core::bank::{self, QUESTIONS};
use quiz_tui::core::config::{self, CliOverrides};
use quiz_tui::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quiz-tui", about = "A non-timed multiple-choice quiz for the terminal")]
struct Args {
    /// Config file to use instead of ~/.quiz-tui/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// File to write logs to
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, source) =
        config::load_config(args.config.as_deref()).map_err(io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
        },
    );

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Config was loaded before the logger existed; report it now
    log::info!("quiz-tui starting up");
    match &source {
        config::ConfigSource::GenerateFailed { .. } => log::warn!("{}", source),
        _ => log::info!("{}", source),
    }
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Resolved config: {:?}", resolved);

    if let Err(e) = bank::validate(QUESTIONS) {
        log::error!("Built-in question bank is invalid: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidData, e));
    }

    tui::run(resolved.display)
}
