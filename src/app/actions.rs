// app/actions.rs

//! Actions the user can trigger on the main `App`.

use enum_iterator::{all, Sequence};
use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::inputs::key::Key;

/// All possible user actions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Sequence)]
pub enum Action {
    CycleLocale,
    NextCard,
    PreviousCard,
    Quit,
    ToggleHelp,
    ToggleLogs,
    ToggleTheme,
}

impl Action {
    /// Return a slice with the key(s) associated to the action.
    pub fn keys(&self) -> &[Key] {
        match self {
            Action::CycleLocale => &[Key::Char('i')],
            Action::NextCard => &[Key::Down],
            Action::PreviousCard => &[Key::Up],
            Action::Quit => &[Key::Ctrl('c'), Key::Char('q')],
            Action::ToggleHelp => &[Key::Char('h')],
            Action::ToggleLogs => &[Key::Char('l')],
            Action::ToggleTheme => &[Key::Char('t')],
        }
    }
}

/// User friendly short description of the action
impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Action::CycleLocale => "Switch language",
            Action::NextCard => "Next card",
            Action::PreviousCard => "Previous card",
            Action::Quit => "Quit",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleLogs => "Toggle logs",
            Action::ToggleTheme => "Toggle light/dark theme",
        };
        write!(f, "{}", str)
    }
}

/// Vec of actions.
/// Can be used to enumerate the actions available in a
/// given context.
/// In a context, a key must map to at most one action.
#[derive(Default, Debug, Clone)]
pub struct Actions(Vec<Action>);

impl Actions {
    /// Given a key, find the corresponding action
    pub fn find(&self, key: Key) -> Option<Action> {
        all::<Action>()
            .filter(|action| self.0.contains(action))
            .find(|action| action.keys().contains(&key))
    }

    pub fn actions(&self) -> &[Action] {
        self.0.as_slice()
    }
}

impl From<Vec<Action>> for Actions {
    /// Builds contextual actions
    ///
    /// # Panics
    ///
    /// If two actions have same key
    fn from(actions: Vec<Action>) -> Self {
        // Check key unicity
        let mut map: HashMap<Key, Vec<Action>> = HashMap::new();
        for action in actions.iter() {
            for key in action.keys().iter() {
                match map.get_mut(key) {
                    Some(vec) => vec.push(*action),
                    None => {
                        map.insert(*key, vec![*action]);
                    }
                }
            }
        }
        let errors = map
            .iter()
            .filter(|(_, actions)| actions.len() > 1) // at least two actions share same shortcut
            .map(|(key, actions)| {
                let actions = actions
                    .iter()
                    .map(Action::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Conflict key {} with actions {}", key, actions)
            })
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            panic!("{}", errors.join("; "))
        }
        Self(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action_by_key() {
        let actions: Actions = vec![Action::Quit, Action::ToggleTheme].into();
        assert_eq!(actions.find(Key::Char('t')), Some(Action::ToggleTheme));
        assert_eq!(actions.find(Key::Ctrl('c')), Some(Action::Quit));
        assert_eq!(actions.find(Key::Char('z')), None);
    }

    #[test]
    fn test_inactive_action_is_not_found() {
        let actions: Actions = vec![Action::Quit].into();
        assert_eq!(actions.find(Key::Char('t')), None);
    }

    #[test]
    #[should_panic]
    fn test_conflicting_keys_panic() {
        // Both entries map to the Up key
        let _: Actions = vec![Action::PreviousCard, Action::PreviousCard].into();
    }
}
