// app/cards.rs

//! Feature cards shown on the homepage, and the selection cursor over
//! them. Card text is resolved through the active locale catalog at
//! render time.

use ratatui::widgets::ListState;

/// One homepage card, identified by its catalog keys.
pub struct Card {
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

/// The cards the starter ships with.
pub const CARDS: &[Card] = &[
    Card {
        title_key: "card_theme_title",
        desc_key: "card_theme_desc",
    },
    Card {
        title_key: "card_locale_title",
        desc_key: "card_locale_desc",
    },
    Card {
        title_key: "card_config_title",
        desc_key: "card_config_desc",
    },
    Card {
        title_key: "card_logging_title",
        desc_key: "card_logging_desc",
    },
];

/// Selection state over the cards list.
#[derive(Default)]
pub struct CardsList {
    state: ListState,
}

impl CardsList {
    pub fn select_next(&mut self, num_cards: usize) {
        if num_cards == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 1) % num_cards,
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self, num_cards: usize) {
        if num_cards == 0 {
            return;
        }
        let previous = match self.state.selected() {
            Some(0) | None => num_cards - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(previous));
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }
}
