// ui/help.rs

//! Panel with contextual help

use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Cell, Row, Table};

use crate::app::state::AppState;

const HELP_KEY_WIDTH: u16 = 12;
const HELP_ACTION_WIDTH: u16 = 26;
pub const HELP_WIDTH: u16 = HELP_KEY_WIDTH + HELP_ACTION_WIDTH;

/// Draw the help panel as a `Table` containing available keys and
/// their associated `Action`
pub fn draw_help<'a>(state: &AppState) -> Table<'a> {
    let roles = &state.theme.roles;
    let key_style = Style::default().fg(roles.accent());
    let help_style = Style::default().fg(roles.hint());

    let mut rows = vec![];
    for action in state.actions.actions().iter() {
        let mut first = true;
        for key in action.keys() {
            let help = if first {
                first = false;
                action.to_string()
            } else {
                String::from("")
            };
            let row = Row::new(vec![
                Cell::from(Span::styled(key.to_string(), key_style)),
                Cell::from(Span::styled(help, help_style)),
            ]);
            rows.push(row);
        }
    }

    Table::new(
        rows,
        [
            Constraint::Length(HELP_KEY_WIDTH),
            Constraint::Min(HELP_ACTION_WIDTH),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(roles.border()).bg(roles.background()))
            .title(state.catalog().get("help_title").to_string()),
    )
    .column_spacing(1)
}
