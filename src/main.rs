use listick::app::{event_loop, App};
use listick::cli::{parse_args, run_cli_command};
use listick::startup::{build_store, default_log_dir, init_logging, StartupConfig};
use listick::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::EventStream;

fn main() -> Result<()> {
    // --version and --help exit here, before any terminal setup
    let command = parse_args(std::env::args(), StartupConfig::from_env());
    let Some(startup) = run_cli_command(command) else {
        std::process::exit(2);
    };

    color_eyre::install()?;

    // Restore the terminal on panic
    setup_panic_hook();

    let site = startup
        .load_site_config()
        .wrap_err("Failed to load site configuration")?;

    if startup.enable_logging {
        if let Err(e) = default_log_dir().and_then(|dir| init_logging(&dir)) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;

    let (store, store_kind) = build_store(&site).wrap_err("Failed to open the document store")?;
    tracing::info!(store = %store_kind, page = ?startup.initial_page, "Starting site");

    let mut app = App::new(site, store, store_kind, startup.initial_page);

    let mut term = TerminalManager::new()?;
    if let Ok(size) = term.terminal().size() {
        app.terminal_width = size.width;
        app.terminal_height = size.height;
    }

    // Main event loop
    let result = runtime.block_on(event_loop::run(
        term.terminal(),
        &mut app,
        EventStream::new(),
    ));

    term.restore()?;
    tracing::info!("Exited");
    result.wrap_err("Event loop failed")
}
