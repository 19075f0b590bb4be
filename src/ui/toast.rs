//! Transient toast notifications stacked in the bottom-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;

const MAX_VISIBLE: usize = 3;
const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

pub struct Toast {
    message: String,
    kind: ToastKind,
    created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }
}

#[derive(Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl ToastManager {
    pub const fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push_back(Toast::new(message, kind));
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Drop expired toasts. Called on each tick.
    pub fn handle_tick(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.toasts.is_empty() {
            return;
        }

        let toast_height = 3u16;
        let toast_width = 50u16.min(area.width.saturating_sub(4));
        let spacing = 1u16;

        // Stack from bottom-right, going upward.
        for (i, toast) in self.toasts.iter().enumerate() {
            let y_offset = u16::try_from(i).unwrap_or(u16::MAX) * (toast_height + spacing);
            let y = area.y + area.height.saturating_sub(toast_height + y_offset + 1);
            let x = area.x + area.width.saturating_sub(toast_width + 2);

            if y < area.y {
                break; // No more room
            }

            let toast_area = Rect::new(x, y, toast_width, toast_height);

            let (border_color, icon) = match toast.kind {
                ToastKind::Success => (theme.success(), "✓"),
                ToastKind::Info => (theme.info(), "ℹ"),
                ToastKind::Error => (theme.error(), "✗"),
            };

            frame.render_widget(Clear, toast_area);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(theme.surface0));

            let inner = block.inner(toast_area);
            frame.render_widget(block, toast_area);

            let text = format!("{icon} {}", toast.message);
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);

            frame.render_widget(paragraph, inner);
        }
    }
}
