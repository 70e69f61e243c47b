// NoteBoard - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Note store loading (exactly once, before anything is written)
// 4. eframe GUI launch, or a headless subcommand

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::ui::...` etc.
pub use noteboard::app;
pub use noteboard::core;
pub use noteboard::platform;
pub use noteboard::ui;
pub use noteboard::util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NoteBoard - a small notes board with search and a light/dark theme.
///
/// Without a subcommand the board opens in a window. Notes are saved to the
/// platform data directory after every change.
#[derive(Parser, Debug)]
#[command(name = "NoteBoard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory holding notes.json (overrides config and platform default).
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Keep notes in memory only; nothing is read from or written to disk.
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Initial GUI theme: light or dark (overrides config). Subcommands accept
    /// and ignore it.
    #[arg(short = 't', long = "theme", global = true)]
    theme: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a note and print its id.
    Add {
        /// Note text (may be empty).
        text: String,
    },

    /// List notes in the order they were added.
    List {
        /// Only show notes containing this text (case-insensitive).
        #[arg(short = 's', long = "search")]
        search: Option<String>,

        /// Print the notes as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by id. Unknown ids are not an error.
    Remove {
        /// Id of the note to delete.
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can apply;
    // warnings are reported once the subscriber is installed.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) =
        platform::config::load_config(&platform_paths.config_file());

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "NoteBoard starting"
    );
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning");
    }

    let theme = match cli.theme.as_deref() {
        Some(name) => crate::core::model::Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "Unknown theme on command line; using config");
            config.theme
        }),
        None => config.theme,
    };

    // Storage location: CLI override > config override > platform default
    let storage: Box<dyn crate::core::storage::BlobStorage> = if cli.ephemeral {
        Box::new(crate::core::storage::MemoryStorage::new())
    } else {
        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(|| platform_paths.data_dir.clone());
        Box::new(platform::storage::FileStorage::new(data_dir))
    };

    let store = match app::store::NoteStore::load(storage) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load notes");
            eprintln!("Error: Failed to load notes: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(command) => {
            if let Err(e) = run_command(command, store) {
                tracing::error!(error = %e, "Command failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        None => launch_gui(app::state::AppState::new(store, theme)),
    }
}

/// Run one headless subcommand against the loaded store.
fn run_command(command: Command, mut store: app::store::NoteStore) -> util::error::Result<()> {
    match command {
        Command::Add { text } => {
            let id = app::commands::add(&mut store, &text)?;
            println!("{id}");
        }
        Command::List { search, json } => {
            println!("{}", app::commands::list(&store, search.as_deref(), json)?);
        }
        Command::Remove { id } => {
            if app::commands::remove(&mut store, &id)? {
                println!("Removed {id}");
            } else {
                println!("No note with id {id}; nothing removed");
            }
        }
    }
    Ok(())
}

fn launch_gui(state: app::state::AppState) {
    tracing::info!(
        notes = state.store.len(),
        theme = %state.theme,
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::NoteBoardApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch NoteBoard GUI: {e}");
        std::process::exit(1);
    }
}
