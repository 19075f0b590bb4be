//! Application shell.
//!
//! Owns the navigator, the active screen, global overlays, and the command
//! spawner. Events flow from the TUI into the active screen (overlays
//! first); screens queue messages and raise [`Intent`]s from their update
//! funnel; the navigator applies intents and the shell rebuilds the active
//! screen when the state changes.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::catalog::ServiceCatalog;
use crate::cli::Args;
use crate::config::{GlobalAction, KeyResolver, save_theme};
use crate::core::command::{Command, CommandEnv};
use crate::core::event::Event;
use crate::core::message::AppMessage;
use crate::core::screen::{Screen, UpdateResult};
use crate::navigator::{ActiveScreen, Intent, Navigator};
use crate::screen::{ChatScreen, FeedScreen, FilterScreen, HomeScreen};
use crate::session::Session;
use crate::theme::Theme;
use crate::tui::Tui;
use crate::ui::{
    Component, ErrorDialog, ErrorDialogEvent, Handled, HelpView, KeybindingSection, StatusBar,
    ThemeEvent, ThemeSelectorView, ToastKind, ToastManager,
};

const FRAME_RATE: f64 = 60.0;
const TICK_RATE: f64 = 4.0;

/// Global overlays that capture input while open.
enum Overlay {
    Help(HelpView),
    ThemeSelector(ThemeSelectorView),
    Error(ErrorDialog),
}

pub struct App {
    catalog: Arc<ServiceCatalog>,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    session: Session,
    navigator: Navigator,
    screen: Box<dyn Screen>,
    overlay: Option<Overlay>,
    toasts: ToastManager,
    status_bar: StatusBar,
    env: CommandEnv,
    app_tx: UnboundedSender<AppMessage>,
    app_rx: UnboundedReceiver<AppMessage>,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(catalog: ServiceCatalog, resolver: Arc<KeyResolver>, theme: Theme) -> Self {
        let (app_tx, app_rx) = mpsc::unbounded_channel();
        let env = CommandEnv::new(app_tx.clone());
        let catalog = Arc::new(catalog);
        let screen: Box<dyn Screen> = Box::new(HomeScreen::new(
            &catalog,
            Arc::clone(&resolver),
            env.clone(),
        ));
        Self {
            catalog,
            status_bar: StatusBar::new(Arc::clone(&resolver)),
            resolver,
            theme,
            session: Session::mock(),
            navigator: Navigator::new(),
            screen,
            overlay: None,
            toasts: ToastManager::new(),
            env,
            app_tx,
            app_rx,
            should_quit: false,
            should_suspend: false,
        }
    }

    /// Apply CLI arguments before entering the UI.
    pub fn apply_cli_args(&mut self, args: &Args) -> color_eyre::Result<()> {
        if let Some(name) = &args.theme {
            self.theme = crate::theme::theme_from_name(name);
        }

        if let Some(id) = &args.service {
            let service = self.catalog.get(id).copied().ok_or_else(|| {
                color_eyre::eyre::eyre!(
                    "Service '{}' not found. Available: {}",
                    id,
                    self.catalog.ids().join(", ")
                )
            })?;
            self.handle_intent(Intent::SelectService(service));
        }

        Ok(())
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        // Kick off the initial screen (news fetch on Home).
        self.screen.init();
        self.drive_screen_update();

        loop {
            self.handle_events(&mut tui).await;
            self.handle_messages(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                self.app_tx.send(AppMessage::Resume)?;
                self.app_tx.send(AppMessage::ClearScreen)?;
                tui.enter()?;
            } else if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) {
        let Some(event) = tui.next_event().await else {
            return;
        };

        match &event {
            Event::Quit => self.send(AppMessage::Quit),
            Event::Tick => self.send(AppMessage::Tick),
            Event::Render => self.send(AppMessage::Render),
            Event::Resize(w, h) => self.send(AppMessage::Resize(*w, *h)),
            Event::Key(key) => {
                // Overlays capture input first.
                if self.overlay.is_some() {
                    self.handle_overlay_key(*key);
                    return;
                }

                // Then the active screen.
                if self.screen.handle_input(&event) {
                    self.drive_screen_update();
                    return;
                }

                // Finally the global bindings.
                if self.resolver.matches_global(key, GlobalAction::Quit) {
                    self.send(AppMessage::Quit);
                } else if self.resolver.matches_global(key, GlobalAction::Help) {
                    self.send(AppMessage::DisplayHelp);
                } else if self.resolver.matches_global(key, GlobalAction::Theme) {
                    self.send(AppMessage::DisplayThemeSelector);
                } else if self.resolver.matches_global(key, GlobalAction::Back) {
                    self.send(AppMessage::Intent(Intent::Back));
                } else if key.code == KeyCode::Char('z')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    self.send(AppMessage::Suspend);
                }
            }
            _ => {
                if self.screen.handle_input(&event) {
                    self.drive_screen_update();
                }
            }
        }
    }

    fn handle_overlay_key(&mut self, key: crossterm::event::KeyEvent) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };

        match overlay {
            Overlay::Help(view) => {
                if let Ok(Handled::Event(_)) = view.handle_key(key) {
                    self.overlay = None;
                }
            }
            Overlay::ThemeSelector(view) => match view.handle_key(key) {
                Ok(Handled::Event(ThemeEvent::Selected(info))) => {
                    self.overlay = None;
                    self.send(AppMessage::SelectTheme(info));
                }
                Ok(Handled::Event(ThemeEvent::Cancelled)) => self.overlay = None,
                _ => {}
            },
            Overlay::Error(dialog) => {
                if let Ok(Handled::Event(ErrorDialogEvent::Dismissed)) = dialog.handle_key(key) {
                    self.overlay = None;
                }
            }
        }
    }

    fn handle_messages(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        while let Ok(message) = self.app_rx.try_recv() {
            if !matches!(message, AppMessage::Tick | AppMessage::Render) {
                debug!("Handling message: {message:?}");
            }

            match message {
                AppMessage::Tick => {
                    self.toasts.handle_tick();
                    self.screen.handle_tick();
                }
                AppMessage::Render => self.render(tui)?,
                AppMessage::Resize(w, h) => {
                    tui.resize(Rect::new(0, 0, w, h))?;
                    self.render(tui)?;
                }
                AppMessage::Suspend => self.should_suspend = true,
                AppMessage::Resume => self.should_suspend = false,
                AppMessage::Quit => self.should_quit = true,
                AppMessage::ClearScreen => tui.clear()?,

                AppMessage::DisplayError(message) => {
                    self.overlay = Some(Overlay::Error(ErrorDialog::new(
                        message,
                        Arc::clone(&self.resolver),
                    )));
                }
                AppMessage::DisplayHelp => {
                    self.overlay = Some(Overlay::Help(self.build_help()));
                }
                AppMessage::DisplayThemeSelector => {
                    self.overlay = Some(Overlay::ThemeSelector(ThemeSelectorView::new(
                        Arc::clone(&self.resolver),
                    )));
                }
                AppMessage::ShowToast { message, kind } => self.toasts.show(message, kind),

                AppMessage::SignedOut { success } => {
                    if success {
                        self.session.sign_out();
                        self.toasts.show("Signed out", ToastKind::Info);
                    } else {
                        self.overlay = Some(Overlay::Error(ErrorDialog::new(
                            "Sign-out failed. Please try again.",
                            Arc::clone(&self.resolver),
                        )));
                    }
                }

                AppMessage::CommandCompleted { name, success } => {
                    debug!(command = %name, success, "Command completed");
                    self.drive_screen_update();
                }

                AppMessage::Intent(intent) => self.handle_intent(intent),
                AppMessage::SelectTheme(info) => {
                    self.theme = info.theme;
                    if let Err(e) = save_theme(info.name) {
                        error!("Failed to persist theme choice: {e}");
                    }
                    self.toasts
                        .show(format!("Theme: {}", info.name), ToastKind::Info);
                }
            }
        }
        Ok(())
    }

    /// Apply a navigation intent and rebuild the active screen if the
    /// navigator state changed. No-op intents leave the screen untouched.
    fn handle_intent(&mut self, intent: Intent) {
        if !self.navigator.apply(intent) {
            return;
        }

        info!(screen = ?self.navigator.screen(), "Navigating");
        self.screen.destroy();
        self.screen = self.build_screen();
        self.screen.init();
        self.drive_screen_update();
    }

    fn build_screen(&self) -> Box<dyn Screen> {
        match self.navigator.screen() {
            ActiveScreen::Home => Box::new(HomeScreen::new(
                &self.catalog,
                Arc::clone(&self.resolver),
                self.env.clone(),
            )),
            ActiveScreen::LocationFilter => {
                let service = *self
                    .navigator
                    .service()
                    .expect("navigator invariant: filter screen has a service");
                Box::new(FilterScreen::new(
                    service,
                    self.navigator.filter(),
                    Arc::clone(&self.resolver),
                ))
            }
            ActiveScreen::ServiceInterface => {
                let service = *self
                    .navigator
                    .service()
                    .expect("navigator invariant: service interface has a service");
                let filter = self.navigator.filter().cloned().unwrap_or_default();
                let author = self
                    .session
                    .current_user()
                    .map_or_else(|| "Guest".to_string(), |u| u.name.clone());
                Box::new(FeedScreen::new(
                    service,
                    filter,
                    author,
                    Arc::clone(&self.resolver),
                    self.env.clone(),
                ))
            }
            ActiveScreen::Chat => {
                let conversation = self
                    .navigator
                    .conversation()
                    .cloned()
                    .expect("navigator invariant: chat screen has a conversation");
                Box::new(ChatScreen::new(
                    conversation,
                    Arc::clone(&self.resolver),
                    self.env.clone(),
                ))
            }
        }
    }

    /// Drain the screen's update funnel, spawning commands and applying
    /// intents until it settles.
    fn drive_screen_update(&mut self) {
        match self.screen.update() {
            UpdateResult::Idle => {}
            UpdateResult::Commands(commands) => {
                for command in commands {
                    self.spawn_command(command);
                }
            }
            UpdateResult::Intent(intent) => self.handle_intent(intent),
            UpdateResult::Error(message) => self.send(AppMessage::DisplayError(message)),
        }
    }

    fn spawn_command(&self, command: Box<dyn Command>) {
        let name = command.name();
        let app_tx = self.app_tx.clone();
        debug!(command = %name, "Spawning command");
        tokio::spawn(async move {
            let success = match command.execute().await {
                Ok(()) => true,
                Err(e) => {
                    error!(command = %name, "Command failed: {e}");
                    let _ = app_tx.send(AppMessage::DisplayError(format!("{name} failed: {e}")));
                    false
                }
            };
            let _ = app_tx.send(AppMessage::CommandCompleted { name, success });
        });
    }

    fn send(&self, message: AppMessage) {
        let _ = self.app_tx.send(message);
    }

    fn build_help(&self) -> HelpView {
        let screen_bindings = self.screen.keybindings();
        let mut sections = Vec::new();
        if !screen_bindings.is_empty() {
            sections.push(KeybindingSection::new("This screen", screen_bindings));
        }
        sections.push(KeybindingSection::new(
            "Global",
            self.status_bar.global_keybindings(),
        ));
        HelpView::with_sections(sections)
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        // Local borrows so the draw closure does not capture `self` twice.
        let theme = self.theme;
        let screen = &mut self.screen;
        let overlay = &mut self.overlay;
        let toasts = &self.toasts;
        let status_bar = &self.status_bar;
        let session = &self.session;

        tui.draw(|frame| {
            let rows = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(9),
            ])
            .split(frame.area());

            render_breadcrumbs(frame, rows[0], &theme, &screen.breadcrumbs());
            screen.view(frame, rows[1], &theme);
            status_bar.render(frame, rows[2], &theme, session, &screen.keybindings());

            match overlay {
                Some(Overlay::Help(view)) => view.render(frame, frame.area(), &theme),
                Some(Overlay::ThemeSelector(view)) => view.render(frame, frame.area(), &theme),
                Some(Overlay::Error(dialog)) => dialog.render(frame, frame.area(), &theme),
                None => {}
            }

            toasts.render(frame, frame.area(), &theme);
        })?;
        Ok(())
    }
}

fn render_breadcrumbs(frame: &mut Frame, area: Rect, theme: &Theme, breadcrumbs: &[String]) {
    let mut spans = vec![Span::styled(
        " CommunityHub",
        Style::default()
            .fg(theme.mauve)
            .add_modifier(Modifier::BOLD),
    )];
    for crumb in breadcrumbs {
        spans.push(Span::styled(" ❯ ", Style::default().fg(theme.overlay0)));
        spans.push(Span::styled(
            crumb.clone(),
            Style::default().fg(theme.subtext1),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
