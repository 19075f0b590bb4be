//! Home screen: news carousel, service directory, and messages pane.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, ListItem, Paragraph, Wrap};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::core::command::{Command, CommandEnv, CopyToClipboardCmd};
use crate::core::event::Event;
use crate::core::screen::{Screen, UpdateResult};
use crate::catalog::ServiceCatalog;
use crate::config::{DialogAction, HomeAction, KeyResolver, NavAction, SearchAction};
use crate::model::chat::sample_conversations;
use crate::model::{Conversation, Service};
use crate::navigator::Intent;
use crate::news::{self, NewsArticle};
use crate::session::SignOutCmd;
use crate::theme::Theme;
use crate::ui::{
    Carousel, ColumnDef, Component, ConfirmDialog, ConfirmEvent, Handled, Keybinding, List,
    ListEvent, ListRow, Spinner, TableComponent, TableEvent, TableRow,
};
use crate::search::Matcher;

/// Messages for the home screen.
#[derive(Debug, Clone)]
pub enum HomeMsg {
    /// (Re)start the news fetch
    Refresh,
    /// Articles arrived from the fetch command
    NewsLoaded(Vec<NewsArticle>),
    /// User activated a service in the directory
    OpenService(Service),
    /// User activated a conversation in the messages pane
    OpenChat(Conversation),
    /// User requested sign-out
    SignOut,
    /// Copy the open article's link
    CopyArticleUrl(String),
}

impl TableRow for Service {
    fn columns() -> &'static [ColumnDef] {
        static COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("Service", Constraint::Min(18)),
            ColumnDef::new("Kind", Constraint::Length(7)),
            ColumnDef::new("Description", Constraint::Min(30)),
        ];
        COLUMNS
    }

    fn render_cells(&self, theme: &Theme) -> Vec<ratatui::widgets::Cell<'static>> {
        vec![
            ratatui::widgets::Cell::from(self.title),
            ratatui::widgets::Cell::from(self.kind.display_name())
                .style(Style::default().fg(theme.teal)),
            ratatui::widgets::Cell::from(self.description),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let matcher = Matcher::new();
        matcher.matches_any([self.title, self.id, self.description], query)
    }
}

impl ListRow for Conversation {
    fn render_row(&self, theme: &Theme) -> ListItem<'static> {
        let unread = if self.unread > 0 {
            Span::styled(
                format!(" ({})", self.unread),
                Style::default().fg(theme.peach).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("")
        };
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    self.name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                unread,
            ]),
            Line::from(Span::styled(
                format!("  {}", self.last_activity),
                Style::default().fg(theme.subtext0),
            )),
        ])
    }
}

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Services,
    Messages,
}

pub struct HomeScreen {
    services: TableComponent<Service>,
    conversations: List<Conversation>,
    carousel: Carousel<NewsArticle>,
    spinner: Spinner,
    news_loading: bool,
    detail_open: bool,
    confirm_sign_out: Option<ConfirmDialog>,
    pane: Pane,
    resolver: Arc<KeyResolver>,
    env: CommandEnv,
    msg_tx: UnboundedSender<HomeMsg>,
    msg_rx: UnboundedReceiver<HomeMsg>,
}

impl HomeScreen {
    pub fn new(catalog: &ServiceCatalog, resolver: Arc<KeyResolver>, env: CommandEnv) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            services: TableComponent::new(catalog.list().to_vec(), Arc::clone(&resolver))
                .with_title(" Services "),
            conversations: List::new(sample_conversations(), Arc::clone(&resolver)),
            carousel: Carousel::new(),
            spinner: Spinner::new(),
            news_loading: false,
            detail_open: false,
            confirm_sign_out: None,
            pane: Pane::Services,
            resolver,
            env,
            msg_tx,
            msg_rx,
        }
    }

    fn queue(&self, msg: HomeMsg) {
        let _ = self.msg_tx.send(msg);
    }

    fn open_detail(&mut self) {
        if self.carousel.current().is_some() {
            self.detail_open = true;
            self.carousel.set_paused(true);
        }
    }

    fn close_detail(&mut self) {
        self.detail_open = false;
        self.carousel.set_paused(false);
    }

    fn handle_detail_key(&mut self, key: &KeyEvent) -> bool {
        if self.resolver.matches_dialog(key, DialogAction::Dismiss) {
            self.close_detail();
            return true;
        }
        if key.code == KeyCode::Char('y')
            && let Some(article) = self.carousel.current()
        {
            self.queue(HomeMsg::CopyArticleUrl(article.url.to_string()));
        }
        // The overlay captures all input while open.
        true
    }

    fn handle_pane_key(&mut self, key: KeyEvent) -> bool {
        match self.pane {
            Pane::Services => match self.services.handle_key(key) {
                Ok(Handled::Event(TableEvent::Activated(service))) => {
                    self.queue(HomeMsg::OpenService(service));
                    true
                }
                Ok(handled) => handled.is_consumed(),
                Err(_) => true,
            },
            Pane::Messages => match self.conversations.handle_key(key) {
                Ok(Handled::Event(ListEvent::Activated(conversation))) => {
                    self.queue(HomeMsg::OpenChat(conversation));
                    true
                }
                Ok(handled) => handled.is_consumed(),
                Err(_) => true,
            },
        }
    }

    fn process_message(&mut self, msg: HomeMsg) -> UpdateResult {
        match msg {
            HomeMsg::Refresh => {
                self.news_loading = true;
                self.spinner.set_label("Fetching community news...");
                FetchNewsCmd::new(self.msg_tx.clone()).into()
            }
            HomeMsg::NewsLoaded(articles) => {
                debug!(count = articles.len(), "News articles loaded");
                self.news_loading = false;
                self.carousel.set_items(articles);
                UpdateResult::Idle
            }
            HomeMsg::OpenService(service) => UpdateResult::Intent(Intent::SelectService(service)),
            HomeMsg::OpenChat(conversation) => {
                UpdateResult::Intent(Intent::OpenConversation(conversation))
            }
            HomeMsg::SignOut => SignOutCmd::new(self.env.clone()).into(),
            HomeMsg::CopyArticleUrl(url) => {
                CopyToClipboardCmd::new(url, "article link", self.env.clone()).into()
            }
        }
    }

    fn render_banner(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let title = format!(" Community News {} ", self.carousel.position());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border()))
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.news_loading {
            self.spinner.render(frame, inner, theme);
            return;
        }

        let Some(article) = self.carousel.current() else {
            frame.render_widget(
                Paragraph::new("No news right now.")
                    .style(Style::default().fg(theme.subtext0))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", article.category),
                    Style::default().fg(theme.teal),
                ),
                Span::styled(
                    article.title,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                article.summary,
                Style::default().fg(theme.subtext1),
            )),
            Line::from(vec![
                Span::styled(article.source, Style::default().fg(theme.subtext0)),
                Span::styled(
                    format!("  ·  {}", article.timestamp),
                    Style::default().fg(theme.overlay1),
                ),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(article) = self.carousel.current() else {
            return;
        };

        let popup_area = area.centered(Constraint::Percentage(70), Constraint::Percentage(60));
        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(Span::styled(
                article.title,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                article.summary,
                Style::default().fg(theme.subtext1),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Source: ", Style::default().fg(theme.overlay1)),
                Span::styled(article.source, Style::default().fg(theme.text)),
                Span::styled("   Published: ", Style::default().fg(theme.overlay1)),
                Span::styled(article.timestamp, Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled("Link: ", Style::default().fg(theme.overlay1)),
                Span::styled(article.url, Style::default().fg(theme.sky)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "y copy link · Enter/Esc close",
                Style::default().fg(theme.overlay1),
            )),
        ];

        let block = Block::default()
            .title(format!(" {} ", article.category))
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            popup_area,
        );
    }
}

impl Screen for HomeScreen {
    fn init(&mut self) {
        self.queue(HomeMsg::Refresh);
    }

    fn handle_tick(&mut self) {
        if self.news_loading {
            self.spinner.on_tick();
        }
        // Inert while the detail overlay is open (the carousel is paused).
        self.carousel.on_tick();
    }

    fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        if let Some(dialog) = self.confirm_sign_out.as_mut() {
            match dialog.handle_key(*key) {
                Ok(Handled::Event(ConfirmEvent::Confirmed)) => {
                    self.confirm_sign_out = None;
                    self.queue(HomeMsg::SignOut);
                }
                Ok(Handled::Event(ConfirmEvent::Cancelled)) => {
                    self.confirm_sign_out = None;
                }
                _ => {}
            }
            return true;
        }

        if self.detail_open {
            return self.handle_detail_key(key);
        }

        // The focused pane gets the key first so search input is never
        // shadowed by the screen-level action keys below.
        if self.handle_pane_key(*key) {
            return true;
        }

        if self.resolver.matches_home(key, HomeAction::SwitchPane) {
            self.pane = match self.pane {
                Pane::Services => Pane::Messages,
                Pane::Messages => Pane::Services,
            };
            return true;
        }
        if self.resolver.matches_home(key, HomeAction::NewsNext) {
            self.carousel.next();
            return true;
        }
        if self.resolver.matches_home(key, HomeAction::NewsPrev) {
            self.carousel.prev();
            return true;
        }
        if self.resolver.matches_home(key, HomeAction::NewsDetail) {
            self.open_detail();
            return true;
        }
        if self.resolver.matches_home(key, HomeAction::Refresh) && !self.news_loading {
            self.queue(HomeMsg::Refresh);
            return true;
        }
        if self.resolver.matches_home(key, HomeAction::SignOut) {
            self.confirm_sign_out = Some(ConfirmDialog::new(
                "Sign out",
                "Sign out of CommunityHub?",
                Arc::clone(&self.resolver),
            ));
            return true;
        }

        false
    }

    fn update(&mut self) -> UpdateResult {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();

        while let Ok(msg) = self.msg_rx.try_recv() {
            match self.process_message(msg) {
                UpdateResult::Idle => {}
                UpdateResult::Commands(cmds) => commands.extend(cmds),
                UpdateResult::Intent(intent) => return UpdateResult::Intent(intent),
                UpdateResult::Error(e) => return UpdateResult::Error(e),
            }
        }

        if commands.is_empty() {
            UpdateResult::Idle
        } else {
            UpdateResult::Commands(commands)
        }
    }

    fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(5),
        ])
        .split(area);

        // Welcome header
        let welcome = vec![
            Line::from(Span::styled(
                "Welcome to CommunityHub",
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Connect, share, and support your local community",
                Style::default().fg(theme.subtext0),
            )),
        ];
        frame.render_widget(
            Paragraph::new(welcome).alignment(Alignment::Center),
            rows[0],
        );

        self.render_banner(frame, rows[1], theme);

        let panes =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(34)]).split(rows[2]);

        self.services.render(frame, panes[0], theme);

        let messages_block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(if self.pane == Pane::Messages {
                theme.border_focused()
            } else {
                theme.border()
            }))
            .title(" Messages ")
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            );
        let messages_inner = messages_block.inner(panes[1]);
        frame.render_widget(messages_block, panes[1]);
        self.conversations.render(frame, messages_inner, theme);

        if self.detail_open {
            self.render_detail(frame, area, theme);
        }
        if let Some(dialog) = self.confirm_sign_out.as_mut() {
            dialog.render(frame, area, theme);
        }
    }

    fn breadcrumbs(&self) -> Vec<String> {
        vec!["Home".to_string()]
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(
                self.resolver.display_home(HomeAction::SwitchPane),
                "Switch pane",
            ),
            Keybinding::hint(
                self.resolver.display_search(SearchAction::Toggle),
                "Search",
            ),
            Keybinding::hint(
                self.resolver.display_home(HomeAction::NewsDetail),
                "Article",
            ),
            Keybinding::new(
                format!(
                    "{}/{}",
                    self.resolver.display_home(HomeAction::NewsPrev),
                    self.resolver.display_home(HomeAction::NewsNext)
                ),
                "News",
            ),
            Keybinding::new(self.resolver.display_home(HomeAction::Refresh), "Refresh"),
            Keybinding::new(self.resolver.display_home(HomeAction::SignOut), "Sign out"),
            Keybinding::new(self.resolver.display_nav(NavAction::Select), "Open"),
        ]
    }
}

/// Simulated fetch from the news backend.
///
/// Stands in for real news APIs: a short delay, then the curated table
/// filtered for relevance and sorted by recency.
pub struct FetchNewsCmd {
    tx: UnboundedSender<HomeMsg>,
}

impl FetchNewsCmd {
    pub const fn new(tx: UnboundedSender<HomeMsg>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Command for FetchNewsCmd {
    fn name(&self) -> String {
        "Fetching community news".to_string()
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let _ = self.tx.send(HomeMsg::NewsLoaded(news::curated()));
        Ok(())
    }
}
