// ui/title.rs

//! Title bar with site name, active locale and theme

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph};

use crate::app::state::AppState;
use crate::theme::ThemePreference;

pub const TITLE_BLOCK_HEIGHT: u16 = 3;

pub fn draw_title<'a>(state: &AppState) -> Paragraph<'a> {
    let catalog = state.catalog();
    let roles = &state.theme.roles;

    let theme_name = match state.switcher.current() {
        ThemePreference::Light => catalog.get("theme_light"),
        ThemePreference::Dark => catalog.get("theme_dark"),
    };
    let mut title = format!(
        "{} — {} · {}",
        state.site.name,
        state.locales.current(),
        theme_name
    );
    if state.is_loading() {
        title = format!("{title} ({})", catalog.get("loading"));
    }

    // The border flashes while a theme transition is in progress
    let border_color = if state.switcher.is_transitioning() {
        roles.border_transition()
    } else {
        roles.border()
    };

    Paragraph::new(title)
        .style(Style::default().fg(roles.title()).bg(roles.background()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(border_color))
                .border_type(BorderType::Plain),
        )
}
