use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::key::{Key, KeyBinding};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalKeybindings {
    pub quit: KeyBinding,
    pub help: KeyBinding,
    pub theme: KeyBinding,
    pub back: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationKeybindings {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub page_up: KeyBinding,
    pub page_down: KeyBinding,
    pub home: KeyBinding,
    pub end: KeyBinding,
    pub select: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchKeybindings {
    pub toggle: KeyBinding,
    pub exit: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeKeybindings {
    pub switch_pane: KeyBinding,
    pub news_next: KeyBinding,
    pub news_prev: KeyBinding,
    pub news_detail: KeyBinding,
    pub refresh: KeyBinding,
    pub sign_out: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterKeybindings {
    pub next_option: KeyBinding,
    pub prev_option: KeyBinding,
    pub clear_field: KeyBinding,
    pub clear_all: KeyBinding,
    pub apply: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedKeybindings {
    pub compose: KeyBinding,
    pub like: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogKeybindings {
    pub confirm: KeyBinding,
    pub cancel: KeyBinding,
    pub dismiss: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeybindingsConfig {
    pub global: GlobalKeybindings,
    pub navigation: NavigationKeybindings,
    pub search: SearchKeybindings,
    pub home: HomeKeybindings,
    pub filter: FilterKeybindings,
    pub feed: FeedKeybindings,
    pub dialog: DialogKeybindings,
}

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            help: Key::new(KeyCode::Char('?')).into(),
            theme: Key::new(KeyCode::Char('t')).into(),
            back: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            up: KeyBinding::multiple(vec![Key::new(KeyCode::Char('k')), Key::new(KeyCode::Up)]),
            down: KeyBinding::multiple(vec![Key::new(KeyCode::Char('j')), Key::new(KeyCode::Down)]),
            page_up: Key::new(KeyCode::PageUp).into(),
            page_down: Key::new(KeyCode::PageDown).into(),
            home: KeyBinding::multiple(vec![Key::new(KeyCode::Char('g')), Key::new(KeyCode::Home)]),
            end: KeyBinding::multiple(vec![Key::new(KeyCode::Char('G')), Key::new(KeyCode::End)]),
            select: Key::new(KeyCode::Enter).into(),
        }
    }
}

impl Default for SearchKeybindings {
    fn default() -> Self {
        Self {
            toggle: Key::new(KeyCode::Char('/')).into(),
            exit: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for HomeKeybindings {
    fn default() -> Self {
        Self {
            switch_pane: Key::new(KeyCode::Tab).into(),
            news_next: Key::new(KeyCode::Char(']')).into(),
            news_prev: Key::new(KeyCode::Char('[')).into(),
            news_detail: Key::new(KeyCode::Char('v')).into(),
            refresh: Key::new(KeyCode::Char('r')).into(),
            sign_out: Key::new(KeyCode::Char('S')).into(),
        }
    }
}

impl Default for FilterKeybindings {
    fn default() -> Self {
        Self {
            next_option: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('l')),
                Key::new(KeyCode::Right),
            ]),
            prev_option: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('h')),
                Key::new(KeyCode::Left),
            ]),
            clear_field: Key::new(KeyCode::Char('x')).into(),
            clear_all: Key::new(KeyCode::Char('c')).into(),
            apply: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('a')),
                Key::new(KeyCode::Enter),
            ]),
        }
    }
}

impl Default for FeedKeybindings {
    fn default() -> Self {
        Self {
            compose: Key::new(KeyCode::Char('n')).into(),
            like: Key::new(KeyCode::Char('l')).into(),
        }
    }
}

impl Default for DialogKeybindings {
    fn default() -> Self {
        Self {
            confirm: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('y')),
                Key::new(KeyCode::Enter),
            ]),
            cancel: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('n')),
                Key::new(KeyCode::Esc),
            ]),
            dismiss: KeyBinding::multiple(vec![
                Key::new(KeyCode::Enter),
                Key::new(KeyCode::Esc),
                Key::new(KeyCode::Char('q')),
            ]),
        }
    }
}
