// ui/logs.rs

//! Panel showing log messages

use ratatui::style::{Color, Style};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::Borders;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::state::AppState;

pub const LOG_BLOCK_HEIGHT: u16 = 12;

// Draw the logs panel
pub fn draw_logs<'a>(state: &AppState) -> TuiLoggerWidget<'a> {
    let roles = &state.theme.roles;

    TuiLoggerWidget::default()
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Blue))
        .style_debug(Style::default().fg(Color::Green))
        .style_trace(Style::default().fg(Color::Gray))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(true)
        .output_file(false)
        .output_line(false)
        .style(Style::default().bg(roles.background()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(roles.border()))
                .title(state.catalog().get("logs_title").to_string()),
        )
}
