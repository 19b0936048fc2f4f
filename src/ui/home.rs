// ui/home.rs

//! Homepage shell: headline, site description and feature cards

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::cards::CARDS;
use crate::app::state::AppState;

pub const HOME_MIN_HEIGHT: u16 = 16;
pub const HOME_MIN_WIDTH: u16 = 44;

const HEADLINE_HEIGHT: u16 = 4;

pub fn draw_home(rect: &mut Frame, state: &mut AppState, area: Rect) {
    let catalog = state.catalog();
    let roles = state.theme.roles.clone();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADLINE_HEIGHT),
            Constraint::Min(HOME_MIN_HEIGHT - HEADLINE_HEIGHT),
        ])
        .split(area);

    // Headline and site description
    let headline = Paragraph::new(vec![
        Line::styled(
            catalog.get("home_headline").to_string(),
            Style::default()
                .fg(roles.text_primary())
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            state.site.description.clone(),
            Style::default().fg(roles.text_muted()),
        ),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(roles.background()))
    .block(
        Block::default()
            .borders(Borders::NONE)
            .style(Style::default().bg(roles.background())),
    );
    rect.render_widget(headline, rows[0]);

    // Feature cards
    let items: Vec<ListItem> = CARDS
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::styled(
                    catalog.get(card.title_key).to_string(),
                    Style::default()
                        .fg(roles.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    catalog.get(card.desc_key).to_string(),
                    Style::default().fg(roles.text_muted()),
                ),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().bg(roles.background()))
        .highlight_style(
            Style::default()
                .fg(roles.selection_fg())
                .bg(roles.selection_bg()),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(roles.border()).bg(roles.background())),
        );

    rect.render_stateful_widget(list, rows[1], state.cards.state_mut());
}
