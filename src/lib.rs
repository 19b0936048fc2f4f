use std::sync::Arc;

use color_eyre::eyre::Result;

use app::{App, AppReturn};
use inputs::handler::Event;
use io::IoEvent;
use tui::Tui;

pub mod app;
pub mod config;
pub mod inputs;
pub mod io;
pub mod locales;
pub mod logger;
pub mod theme;
mod tui;
pub mod ui;

pub async fn start_ui(app: &Arc<tokio::sync::Mutex<App>>) -> Result<()> {
    let mut tui = Tui::default()?;
    tui.init()?;

    // Resolve the initial theme preference on the io thread
    {
        let app = app.lock().await;
        app.dispatch_to_io(IoEvent::Initialize);
    }

    loop {
        // Render
        {
            let mut app = app.lock().await;
            tui.draw(&mut app)?;
        }

        // Handle inputs
        let event = tui.events.next().await;
        let mut app = app.lock().await;
        let result = match event {
            Event::Input(key_event) => app.process_key_event(key_event),
            Event::Tick => app.update_on_tick(),
        };
        // Check if we should exit
        if result == AppReturn::Exit {
            tui.events.close();
            break;
        }
    }

    tui.exit()?;

    Ok(())
}
