use std::panic;
use std::process;
use std::sync::Arc;

use clap::{arg, command};
use color_eyre::eyre::{eyre, Result};

use starter_tui::app::state::AppState;
use starter_tui::app::App;
use starter_tui::config;
use starter_tui::io::handler::IoAsyncHandler;
use starter_tui::io::IoEvent;
use starter_tui::locales::Locale;
use starter_tui::logger::setup_logger;
use starter_tui::start_ui;
use starter_tui::theme::ThemePreference;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Ensure the process terminates if one of the threads panics.
    let orig_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // invoke the default handler and exit the process
        orig_hook(panic_info);
        process::exit(1);
    }));

    let matches = command!()
        .arg(
            arg!(--theme <PREFERENCE> "Initial theme preference (light or dark), overriding the saved one")
                .required(false),
        )
        .arg(arg!(--locale <CODE> "Initial locale (en or fr)").required(false))
        .get_matches();

    let theme_override = matches
        .get_one::<String>("theme")
        .map(|s| ThemePreference::from_name(s).ok_or_else(|| eyre!("Unknown theme: {s}")))
        .transpose()?;
    let locale = matches
        .get_one::<String>("locale")
        .map(|s| Locale::from_code(s).ok_or_else(|| eyre!("Unknown locale: {s}")))
        .transpose()?
        .unwrap_or_default();

    setup_logger();

    let paths = config::get_or_build_paths()?;
    let site = config::load_or_init_site(&paths)?;

    // Channel to the io thread
    let (io_tx, mut io_rx) = tokio::sync::mpsc::unbounded_channel::<IoEvent>();

    // We need to share the App between threads
    let state = AppState::new(site, paths.themes_dir.clone(), theme_override, locale);
    let app = Arc::new(tokio::sync::Mutex::new(App::new(io_tx, state)));
    let app_ui = Arc::clone(&app);

    // Handle deferred work in a specific thread
    tokio::spawn(async move {
        let mut handler = IoAsyncHandler::new(app, paths);
        while let Some(io_event) = io_rx.recv().await {
            handler.handle_io_event(io_event).await;
        }
    });

    start_ui(&app_ui).await?;

    Ok(())
}
