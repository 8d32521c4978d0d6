mod app;
mod domain;
mod ids;
mod input;
mod logging;
mod persistence;
mod store;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ids::UuidGenerator;
use persistence::{
    ensure_data_dir, init_local_data_dir, load_or_create_settings, FileStorage, Settings,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use store::Store;

#[derive(Parser)]
#[command(name = "checkoff")]
#[command(about = "A small terminal to-do list that remembers your tasks between runs")]
#[command(long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .checkoff directory, then ~/.checkoff
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .checkoff directory in the current directory
    Init,
    /// Print the list and how many items are left
    List,
    /// Add an item without opening the UI
    Add {
        /// Item text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Replace the list with the default items
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_data_dir()?;
        println!("Initialized checkoff directory: {}", data_dir.display());
        println!();
        println!("checkoff will now keep its list in this directory.");
        return Ok(());
    }

    let data_dir = ensure_data_dir(cli.dir.as_deref())?;
    logging::init(&data_dir);
    let settings = load_or_create_settings(&data_dir)?;
    let mut store = open_store(&data_dir, &settings);

    match cli.command {
        Some(Commands::List) => {
            print_list(&store);
            Ok(())
        }
        Some(Commands::Add { text }) => {
            let text = text.join(" ");
            store.add(&text)?;
            print_list(&store);
            Ok(())
        }
        Some(Commands::Reset) => {
            store.reset()?;
            print_list(&store);
            Ok(())
        }
        Some(Commands::Init) | None => run_tui(store, &settings),
    }
}

fn open_store(data_dir: &Path, settings: &Settings) -> Store {
    Store::initialize(
        settings.storage_key.as_str(),
        Box::new(FileStorage::new(data_dir.to_path_buf())),
        Box::new(UuidGenerator),
    )
}

fn print_list(store: &Store) {
    println!("{}", domain::remaining_label(store.items()));
    for item in store.items() {
        println!("{} {}", domain::checkbox(item), item.text);
    }
}

fn run_tui(store: Store, settings: &Settings) -> Result<()> {
    let mut app = AppState::new(store, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Nothing changes between key presses, so block until the next one
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                return Ok(());
            }
        }
    }
}
