//! Location filter screen.
//!
//! Edits a draft [`LocationFilter`] field by field. Values cycle through
//! the preset lists (with "any" as the empty state); applying raises
//! [`Intent::ApplyFilters`] with a committed snapshot of the draft.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::config::{FilterAction, KeyResolver, NavAction};
use crate::core::event::Event;
use crate::core::screen::{Screen, UpdateResult};
use crate::model::filter::options;
use crate::model::{FilterField, LocationFilter, Service};
use crate::navigator::Intent;
use crate::theme::Theme;
use crate::ui::Keybinding;

pub struct FilterScreen {
    service: Service,
    draft: LocationFilter,
    selected: usize,
    apply_queued: bool,
    resolver: Arc<KeyResolver>,
}

impl FilterScreen {
    /// Create the screen for a service. When a committed filter already
    /// exists (the user is re-opening the screen) the draft starts
    /// pre-populated from it; otherwise it starts empty.
    pub fn new(service: Service, committed: Option<&LocationFilter>, resolver: Arc<KeyResolver>) -> Self {
        Self {
            service,
            draft: committed.cloned().unwrap_or_default(),
            selected: 0,
            apply_queued: false,
            resolver,
        }
    }

    const fn selected_field(&self) -> FilterField {
        FilterField::ALL[self.selected]
    }

    /// Cycle the selected field through empty -> presets -> empty.
    fn cycle_option(&mut self, forward: bool) {
        let field = self.selected_field();
        let presets = options(field);
        let current = self.draft.get(field);

        let position = presets.iter().position(|option| *option == current);
        let next: Option<&str> = match (position, forward) {
            // empty -> first / last
            (None, true) => presets.first().copied(),
            (None, false) => presets.last().copied(),
            (Some(i), true) => presets.get(i + 1).copied(),
            (Some(0), false) => None,
            (Some(i), false) => presets.get(i - 1).copied(),
        };

        self.draft.set(field, next.unwrap_or_default());
    }

    fn render_field_rows(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::new();
        for (i, field) in FilterField::ALL.iter().enumerate() {
            let value = self.draft.get(*field);
            let is_selected = i == self.selected;

            let marker = if is_selected { "▶ " } else { "  " };
            let value_span = if value.is_empty() {
                Span::styled("(any)", Style::default().fg(theme.overlay0))
            } else {
                Span::styled(
                    format!("◀ {value} ▶"),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )
            };

            let label_style = if is_selected {
                Style::default()
                    .fg(theme.lavender)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.subtext1)
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.lavender)),
                Span::styled(format!("{:<10}", field.label()), label_style),
                value_span,
            ]));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let count = self.draft.count_active();
        let plural = if count == 1 { "" } else { "s" };

        let mut lines = vec![Line::from(Span::styled(
            format!("{count} filter{plural} applied"),
            Style::default().fg(theme.subtext0),
        ))];

        if count > 0 {
            let badges: Vec<Span> = self
                .draft
                .badges()
                .into_iter()
                .flat_map(|badge| {
                    vec![
                        Span::styled(format!(" {badge} "), Style::default().fg(theme.teal).bg(theme.surface0)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(badges));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

impl Screen for FilterScreen {
    fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        if self.resolver.matches_filter(key, FilterAction::Apply) {
            self.apply_queued = true;
            return true;
        }
        if self.resolver.matches_nav(key, NavAction::Down) {
            self.selected = (self.selected + 1) % FilterField::ALL.len();
            return true;
        }
        if self.resolver.matches_nav(key, NavAction::Up) {
            self.selected =
                (self.selected + FilterField::ALL.len() - 1) % FilterField::ALL.len();
            return true;
        }
        if self.resolver.matches_filter(key, FilterAction::NextOption) {
            self.cycle_option(true);
            return true;
        }
        if self.resolver.matches_filter(key, FilterAction::PrevOption) {
            self.cycle_option(false);
            return true;
        }
        if self.resolver.matches_filter(key, FilterAction::ClearField) {
            self.draft.clear_field(self.selected_field());
            return true;
        }
        if self.resolver.matches_filter(key, FilterAction::ClearAll) {
            self.draft.clear();
            return true;
        }

        false
    }

    fn update(&mut self) -> UpdateResult {
        if self.apply_queued {
            self.apply_queued = false;
            return UpdateResult::Intent(Intent::ApplyFilters(self.draft.commit()));
        }
        UpdateResult::Idle
    }

    fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let card = area.centered(Constraint::Max(64), Constraint::Max(18));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border()))
            .title(format!(" {} — Location & Distance Filters ", self.service.title))
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let sections = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Min(3),
        ])
        .split(inner);

        self.render_field_rows(frame, sections[1], theme);
        self.render_summary(frame, sections[2], theme);
    }

    fn breadcrumbs(&self) -> Vec<String> {
        vec![self.service.title.to_string(), "Filters".to_string()]
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_filter(FilterAction::Apply), "Apply"),
            Keybinding::hint(
                format!(
                    "{}/{}",
                    self.resolver.display_filter(FilterAction::PrevOption),
                    self.resolver.display_filter(FilterAction::NextOption)
                ),
                "Change value",
            ),
            Keybinding::new(
                self.resolver.display_filter(FilterAction::ClearField),
                "Clear field",
            ),
            Keybinding::new(
                self.resolver.display_filter(FilterAction::ClearAll),
                "Clear all",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceCatalog;
    use crate::config::keybindings::KeybindingsConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn screen() -> FilterScreen {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        let service = *ServiceCatalog::new().get("rides").expect("known service");
        FilterScreen::new(service, None, resolver)
    }

    fn press(screen: &mut FilterScreen, code: KeyCode) -> bool {
        screen.handle_input(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn cycling_walks_presets_and_wraps_to_empty() {
        let mut s = screen();
        assert_eq!(s.draft.get(FilterField::Country), "");

        press(&mut s, KeyCode::Right);
        assert_eq!(s.draft.get(FilterField::Country), "United States");

        // Walk off the end of the presets back to empty.
        for _ in 0..3 {
            press(&mut s, KeyCode::Right);
        }
        assert_eq!(s.draft.get(FilterField::Country), "");
    }

    #[test]
    fn cycling_backward_from_empty_picks_the_last_preset() {
        let mut s = screen();
        press(&mut s, KeyCode::Left);
        assert_eq!(s.draft.get(FilterField::Country), "United Kingdom");
    }

    #[test]
    fn clear_all_resets_the_draft() {
        let mut s = screen();
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Right);
        assert_eq!(s.draft.count_active(), 2);

        press(&mut s, KeyCode::Char('c'));
        assert_eq!(s.draft.count_active(), 0);
    }

    #[test]
    fn apply_raises_an_intent_with_the_committed_draft() {
        let mut s = screen();
        press(&mut s, KeyCode::Right);
        assert!(press(&mut s, KeyCode::Enter));

        match s.update() {
            UpdateResult::Intent(Intent::ApplyFilters(filter)) => {
                assert_eq!(filter.get(FilterField::Country), "United States");
            }
            _ => panic!("expected ApplyFilters intent"),
        }
        // The queue drains after one update.
        assert!(matches!(s.update(), UpdateResult::Idle));
    }

    #[test]
    fn committed_filter_seeds_the_draft() {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        let service = *ServiceCatalog::new().get("rides").expect("known service");
        let mut committed = LocationFilter::new();
        committed.set(FilterField::City, "San Diego");

        let s = FilterScreen::new(service, Some(&committed), resolver);
        assert_eq!(s.draft.get(FilterField::City), "San Diego");
    }
}
