// ui/mod.rs

//! ratatui user interface

use log::*;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod help;
mod home;
mod logs;
mod title;

use crate::app::state::AppState;
use help::{draw_help, HELP_WIDTH};
use home::{draw_home, HOME_MIN_HEIGHT, HOME_MIN_WIDTH};
use logs::{draw_logs, LOG_BLOCK_HEIGHT};
use title::{draw_title, TITLE_BLOCK_HEIGHT};

/// Render all blocks.
pub fn render(rect: &mut Frame, state: &mut AppState) {
    let size = rect.area();
    check_size(&size, state);

    let mut app_constraints = vec![
        Constraint::Length(TITLE_BLOCK_HEIGHT),
        Constraint::Min(HOME_MIN_HEIGHT),
    ];
    if state.show_logs {
        app_constraints.push(Constraint::Length(LOG_BLOCK_HEIGHT));
    }

    // Vertical layout
    let app_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(app_constraints)
        .split(size);

    // Title
    let title = draw_title(state);
    rect.render_widget(title, app_rows[0]);

    // Body: homepage shell, optional help panel
    let mut body_constraints = vec![Constraint::Min(HOME_MIN_WIDTH)];
    if state.show_help {
        body_constraints.push(Constraint::Length(HELP_WIDTH));
    }

    let body_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(app_rows[1]);

    // Homepage
    draw_home(rect, state, body_columns[0]);

    // Help
    if state.show_help {
        let help = draw_help(state);
        rect.render_widget(help, body_columns[1]);
    }

    // Logs
    if state.show_logs {
        let logs = draw_logs(state);
        rect.render_widget(logs, app_rows[2]);
    }
}

/// Logs warnings when terminal size constraints are not respected.
fn check_size(rect: &Rect, state: &AppState) {
    let mut min_width = HOME_MIN_WIDTH;
    if state.show_help {
        min_width += HELP_WIDTH
    };
    if rect.width < min_width {
        warn!("Require width >= {}, (got {})", min_width, rect.width);
    }

    let mut min_height = TITLE_BLOCK_HEIGHT + HOME_MIN_HEIGHT;
    if state.show_logs {
        min_height += LOG_BLOCK_HEIGHT
    };
    if rect.height < min_height {
        warn!("Require height >= {}, (got {})", min_height, rect.height);
    }
}
