use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::{
    DialogAction, FeedAction, FilterAction, GlobalAction, HomeAction, NavAction, SearchAction,
};
use crate::config::keybindings::KeybindingsConfig;

/// Resolves key events against the configured keybindings and renders the
/// bound keys for display in hints and the help overlay.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.matches(event),
            GlobalAction::Help => kb.help.matches(event),
            GlobalAction::Theme => kb.theme.matches(event),
            GlobalAction::Back => kb.back.matches(event),
        }
    }

    pub fn display_global(&self, action: GlobalAction) -> String {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.display(),
            GlobalAction::Help => kb.help.display(),
            GlobalAction::Theme => kb.theme.display(),
            GlobalAction::Back => kb.back.display(),
        }
    }

    pub fn matches_nav(&self, event: &KeyEvent, action: NavAction) -> bool {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.matches(event),
            NavAction::Down => kb.down.matches(event),
            NavAction::PageUp => kb.page_up.matches(event),
            NavAction::PageDown => kb.page_down.matches(event),
            NavAction::Home => kb.home.matches(event),
            NavAction::End => kb.end.matches(event),
            NavAction::Select => kb.select.matches(event),
        }
    }

    pub fn display_nav(&self, action: NavAction) -> String {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.display(),
            NavAction::Down => kb.down.display(),
            NavAction::PageUp => kb.page_up.display(),
            NavAction::PageDown => kb.page_down.display(),
            NavAction::Home => kb.home.display(),
            NavAction::End => kb.end.display(),
            NavAction::Select => kb.select.display(),
        }
    }

    pub fn matches_search(&self, event: &KeyEvent, action: SearchAction) -> bool {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => kb.toggle.matches(event),
            SearchAction::Exit => kb.exit.matches(event),
        }
    }

    pub fn display_search(&self, action: SearchAction) -> String {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => kb.toggle.display(),
            SearchAction::Exit => kb.exit.display(),
        }
    }

    pub fn matches_home(&self, event: &KeyEvent, action: HomeAction) -> bool {
        let kb = &self.keybindings.home;
        match action {
            HomeAction::SwitchPane => kb.switch_pane.matches(event),
            HomeAction::NewsNext => kb.news_next.matches(event),
            HomeAction::NewsPrev => kb.news_prev.matches(event),
            HomeAction::NewsDetail => kb.news_detail.matches(event),
            HomeAction::Refresh => kb.refresh.matches(event),
            HomeAction::SignOut => kb.sign_out.matches(event),
        }
    }

    pub fn display_home(&self, action: HomeAction) -> String {
        let kb = &self.keybindings.home;
        match action {
            HomeAction::SwitchPane => kb.switch_pane.display(),
            HomeAction::NewsNext => kb.news_next.display(),
            HomeAction::NewsPrev => kb.news_prev.display(),
            HomeAction::NewsDetail => kb.news_detail.display(),
            HomeAction::Refresh => kb.refresh.display(),
            HomeAction::SignOut => kb.sign_out.display(),
        }
    }

    pub fn matches_filter(&self, event: &KeyEvent, action: FilterAction) -> bool {
        let kb = &self.keybindings.filter;
        match action {
            FilterAction::NextOption => kb.next_option.matches(event),
            FilterAction::PrevOption => kb.prev_option.matches(event),
            FilterAction::ClearField => kb.clear_field.matches(event),
            FilterAction::ClearAll => kb.clear_all.matches(event),
            FilterAction::Apply => kb.apply.matches(event),
        }
    }

    pub fn display_filter(&self, action: FilterAction) -> String {
        let kb = &self.keybindings.filter;
        match action {
            FilterAction::NextOption => kb.next_option.display(),
            FilterAction::PrevOption => kb.prev_option.display(),
            FilterAction::ClearField => kb.clear_field.display(),
            FilterAction::ClearAll => kb.clear_all.display(),
            FilterAction::Apply => kb.apply.display(),
        }
    }

    pub fn matches_feed(&self, event: &KeyEvent, action: FeedAction) -> bool {
        let kb = &self.keybindings.feed;
        match action {
            FeedAction::Compose => kb.compose.matches(event),
            FeedAction::Like => kb.like.matches(event),
        }
    }

    pub fn display_feed(&self, action: FeedAction) -> String {
        let kb = &self.keybindings.feed;
        match action {
            FeedAction::Compose => kb.compose.display(),
            FeedAction::Like => kb.like.display(),
        }
    }

    pub fn matches_dialog(&self, event: &KeyEvent, action: DialogAction) -> bool {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Confirm => kb.confirm.matches(event),
            DialogAction::Cancel => kb.cancel.matches(event),
            DialogAction::Dismiss => kb.dismiss.matches(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn resolver() -> KeyResolver {
        KeyResolver::new(Arc::new(KeybindingsConfig::default()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_global_bindings_resolve() {
        let r = resolver();
        assert!(r.matches_global(&key(KeyCode::Char('q')), GlobalAction::Quit));
        assert!(r.matches_global(&key(KeyCode::Esc), GlobalAction::Back));
        assert!(!r.matches_global(&key(KeyCode::Char('z')), GlobalAction::Quit));
    }

    #[test]
    fn filter_apply_accepts_either_binding() {
        let r = resolver();
        assert!(r.matches_filter(&key(KeyCode::Char('a')), FilterAction::Apply));
        assert!(r.matches_filter(&key(KeyCode::Enter), FilterAction::Apply));
    }

    #[test]
    fn display_joins_multi_bindings() {
        let r = resolver();
        assert_eq!(r.display_nav(NavAction::Down), "j/Down");
    }

    #[test]
    fn dialog_confirm_and_cancel_use_distinct_keys() {
        let r = resolver();
        assert!(r.matches_dialog(&key(KeyCode::Char('y')), DialogAction::Confirm));
        assert!(r.matches_dialog(&key(KeyCode::Char('n')), DialogAction::Cancel));
        assert!(!r.matches_dialog(&key(KeyCode::Char('y')), DialogAction::Cancel));
    }
}
