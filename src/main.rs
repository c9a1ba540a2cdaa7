use clap::Parser;
use snap_extractor::{cli, ReportKind, SavePaths};
use std::path::PathBuf;

/// Marvel SNAP save extractor - booster, mastery, variant and album reports
#[derive(Parser, Debug)]
#[command(name = "snap_extractor")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to CollectionState.json
    #[arg(long)]
    collection: Option<PathBuf>,

    /// Path to CharacterMasteryState.json
    #[arg(long)]
    mastery: Option<PathBuf>,

    /// Folder holding both save files (default: the SNAP save folder, or SNAP_STATES_DIR)
    #[arg(long)]
    states_dir: Option<PathBuf>,

    /// Build this report in the terminal instead of opening the window
    #[arg(long, value_enum)]
    report: Option<ReportKind>,

    /// Write the report to a CSV file instead of printing it
    #[arg(long, requires = "report")]
    export: Option<PathBuf>,

    /// Number of rows to print
    #[arg(long, default_value_t = 200)]
    limit: usize,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=snap_extractor=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let explicit = args.collection.is_some() || args.mastery.is_some() || args.states_dir.is_some();
    let paths = SavePaths::resolve(args.collection, args.mastery, args.states_dir);

    let Some(kind) = args.report else {
        log::info!("Starting SNAP Save Extractor");
        // Only pre-fill from the command line; the window discovers defaults itself
        let initial = if explicit { paths } else { None };
        if let Err(e) = snap_extractor::ui::launch_gui(initial) {
            log::error!("Application error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    };

    let result = match paths {
        Some(paths) => cli::run_headless(
            &paths,
            kind,
            args.export.as_deref(),
            args.limit,
            &mut std::io::stdout(),
        ),
        None => Err(snap_extractor::Error::MissingSaveFiles),
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
