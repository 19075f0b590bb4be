//! Service interface: the searchable posts feed with compose.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Clear, Paragraph};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::{FeedAction, KeyResolver, SearchAction};
use crate::core::command::CommandEnv;
use crate::core::event::Event;
use crate::core::screen::{Screen, UpdateResult};
use crate::model::post::sample_posts;
use crate::model::{LocationFilter, Post, Service};
use crate::search::Matcher;
use crate::theme::Theme;
use crate::ui::{
    ColumnDef, Component, Handled, Keybinding, TableComponent, TableRow, TextInput,
    TextInputEvent, ToastKind,
};

/// Messages for the feed screen.
#[derive(Debug, Clone)]
enum FeedMsg {
    /// User submitted a new post
    Posted(String),
    /// User liked the selected post
    Like,
}

impl TableRow for Post {
    fn columns() -> &'static [ColumnDef] {
        static COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("Author", Constraint::Length(16)),
            ColumnDef::new("Posted", Constraint::Length(12)),
            ColumnDef::new("Likes", Constraint::Length(6)),
            ColumnDef::new("Replies", Constraint::Length(8)),
            ColumnDef::new("Post", Constraint::Min(30)),
        ];
        COLUMNS
    }

    fn render_cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let author_style = if self.own {
            Style::default().fg(theme.lavender).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let content = if self.has_image {
            format!("{} [image]", self.content)
        } else {
            self.content.clone()
        };
        vec![
            Cell::from(self.author.clone()).style(author_style),
            Cell::from(self.timestamp.clone()),
            Cell::from(self.likes.to_string()),
            Cell::from(self.comments.to_string()),
            Cell::from(content),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let matcher = Matcher::new();
        matcher.matches_any([self.author.as_str(), self.content.as_str()], query)
    }
}

pub struct FeedScreen {
    service: Service,
    filter: LocationFilter,
    author: String,
    table: TableComponent<Post>,
    compose: Option<TextInput>,
    next_post_id: u32,
    resolver: Arc<KeyResolver>,
    env: CommandEnv,
    msg_tx: UnboundedSender<FeedMsg>,
    msg_rx: UnboundedReceiver<FeedMsg>,
}

impl FeedScreen {
    pub fn new(
        service: Service,
        filter: LocationFilter,
        author: String,
        resolver: Arc<KeyResolver>,
        env: CommandEnv,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let posts = sample_posts();
        let next_post_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            service,
            filter,
            author,
            table: TableComponent::new(posts, Arc::clone(&resolver))
                .with_title(format!(" {} ", service.title)),
            compose: None,
            next_post_id,
            resolver,
            env,
            msg_tx,
            msg_rx,
        }
    }

    fn queue(&self, msg: FeedMsg) {
        let _ = self.msg_tx.send(msg);
    }

    fn open_compose(&mut self) {
        self.compose = Some(TextInput::new("New Post").with_placeholder(format!(
            "What would you like to share in {}?",
            self.service.title
        )));
    }

    fn handle_compose_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let Some(input) = self.compose.as_mut() else {
            return false;
        };

        match input.handle_key(key) {
            Ok(Handled::Event(TextInputEvent::Submitted(content))) => {
                self.compose = None;
                if !content.trim().is_empty() {
                    self.queue(FeedMsg::Posted(content.trim().to_string()));
                }
                true
            }
            Ok(Handled::Event(TextInputEvent::Cancelled)) => {
                self.compose = None;
                true
            }
            _ => true,
        }
    }

    fn process_message(&mut self, msg: FeedMsg) {
        match msg {
            FeedMsg::Posted(content) => {
                let mut post = Post::new(self.next_post_id, self.author.clone(), content, "just now");
                post.own = true;
                self.next_post_id += 1;
                self.table.prepend(post);
                self.env
                    .show_toast(format!("Posted to {}", self.service.title), ToastKind::Success);
            }
            FeedMsg::Like => {
                self.table.modify_selected(|post| post.likes += 1);
            }
        }
    }
}

impl Screen for FeedScreen {
    fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        if self.compose.is_some() {
            return self.handle_compose_key(*key);
        }

        // The table gets the key first so search input is never shadowed
        // by the feed action keys below.
        match self.table.handle_key(*key) {
            Ok(Handled::Ignored) => {}
            Ok(_) => return true,
            Err(_) => return true,
        }

        if self.resolver.matches_feed(key, FeedAction::Compose) {
            self.open_compose();
            return true;
        }
        if self.resolver.matches_feed(key, FeedAction::Like) {
            self.queue(FeedMsg::Like);
            return true;
        }

        false
    }

    fn update(&mut self) -> UpdateResult {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
        }
        UpdateResult::Idle
    }

    fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(5)]).split(area);

        // Header strip: kind badge plus the committed filter badges.
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.service.kind.display_name()),
                Style::default().fg(theme.base).bg(theme.teal),
            ),
            Span::raw("  "),
        ];
        if self.filter.is_empty() {
            spans.push(Span::styled(
                "No location filters",
                Style::default().fg(theme.overlay0),
            ));
        } else {
            for badge in self.filter.badges() {
                spans.push(Span::styled(
                    format!(" {badge} "),
                    Style::default().fg(theme.teal).bg(theme.surface0),
                ));
                spans.push(Span::raw(" "));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

        self.table.render(frame, rows[1], theme);

        if let Some(input) = self.compose.as_mut() {
            let popup_area = area.centered(Constraint::Percentage(60), Constraint::Length(3));
            frame.render_widget(Clear, popup_area);
            input.render(frame, popup_area, theme);
        }
    }

    fn breadcrumbs(&self) -> Vec<String> {
        vec![self.service.title.to_string(), "Feed".to_string()]
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_feed(FeedAction::Compose), "New post"),
            Keybinding::hint(
                self.resolver.display_search(SearchAction::Toggle),
                "Search",
            ),
            Keybinding::new(self.resolver.display_feed(FeedAction::Like), "Like"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceCatalog;
    use crate::config::keybindings::KeybindingsConfig;
    use crate::core::message::AppMessage;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn screen() -> FeedScreen {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        let (app_tx, _app_rx) = mpsc::unbounded_channel::<AppMessage>();
        let service = *ServiceCatalog::new().get("rides").expect("known service");
        FeedScreen::new(
            service,
            LocationFilter::new(),
            "John Doe".to_string(),
            resolver,
            CommandEnv::new(app_tx),
        )
    }

    fn press(screen: &mut FeedScreen, code: KeyCode) -> bool {
        screen.handle_input(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn composing_a_post_prepends_it_to_the_feed() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('n'));
        assert!(s.compose.is_some());

        for c in "hello".chars() {
            press(&mut s, KeyCode::Char(c));
        }
        press(&mut s, KeyCode::Enter);
        assert!(s.compose.is_none());

        let _ = s.update();
        let top = s.table.selected_item().expect("post selected");
        assert_eq!(top.content, "hello");
        assert!(top.own);
        assert_eq!(top.author, "John Doe");
    }

    #[test]
    fn blank_posts_are_discarded() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('n'));
        press(&mut s, KeyCode::Char(' '));
        press(&mut s, KeyCode::Enter);
        let _ = s.update();

        let top = s.table.selected_item().expect("seed post selected");
        assert_ne!(top.content.trim(), "");
        assert!(!top.own);
    }

    #[test]
    fn liking_increments_the_selected_post() {
        let mut s = screen();
        let before = s.table.selected_item().expect("selected").likes;
        press(&mut s, KeyCode::Char('l'));
        let _ = s.update();
        assert_eq!(s.table.selected_item().expect("selected").likes, before + 1);
    }

    #[test]
    fn escape_outside_compose_is_ignored_for_back_navigation() {
        let mut s = screen();
        assert!(!press(&mut s, KeyCode::Esc));
    }
}
