use std::path::PathBuf;

use clap::{Parser, Subcommand, arg};
use egui::Vec2;

use paceline::PacelineError;
use paceline::export::export_history;
use paceline::history::{JsonFileHistory, RaceStore};
use paceline::ui::{PacelineApp, config::AppConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the timing application
    Run {
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Dump the persisted race history as JSON lines
    Export {
        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

fn open_store(data_dir: Option<PathBuf>) -> Result<RaceStore<JsonFileHistory>, PacelineError> {
    let persistence = match data_dir {
        Some(dir) => JsonFileHistory::new(dir)?,
        None => JsonFileHistory::new_default()?,
    };
    RaceStore::open(persistence)
}

fn run(data_dir: Option<PathBuf>) -> Result<(), PacelineError> {
    let store = open_store(data_dir)?;
    let app_config = AppConfig::from_local_file().unwrap_or_default();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(420., 760.));

    eframe::run_native(
        "Paceline",
        native_options,
        Box::new(|cc| Ok(Box::new(PacelineApp::new(store, app_config, cc)))),
    )
    .expect("could not start app");
    Ok(())
}

fn export(output: &PathBuf, data_dir: Option<PathBuf>) -> Result<(), PacelineError> {
    let store = open_store(data_dir)?;
    export_history(output, store.races())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");
    match &cli.command {
        Commands::Run { data_dir } => {
            run(data_dir.clone()).expect("Error while running the timing app")
        }
        Commands::Export { output, data_dir } => {
            export(output, data_dir.clone()).expect("Error while exporting race history")
        }
    };
}
