//! Non-blocking, timed notices for rejected input.
//!
//! Replaces the blocking alert a browser widget would use: notices stack in
//! the top-right corner of the control and expire on their own, so the core
//! logic stays headlessly testable.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notices displayed simultaneously.
const MAX_VISIBLE_NOTICES: usize = 3;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// One timed notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    created_at: Instant,
    duration: Duration,
}

impl Notice {
    pub fn new(message: String, level: NoticeLevel) -> Self {
        let duration = match level {
            NoticeLevel::Warning => Duration::from_secs(3),
            NoticeLevel::Error => Duration::from_secs(4),
        };
        Self::with_duration(message, level, duration)
    }

    pub fn with_duration(message: String, level: NoticeLevel, duration: Duration) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    fn icon(&self) -> &'static str {
        match self.level {
            NoticeLevel::Warning => "⚠",
            NoticeLevel::Error => "✗",
        }
    }

    fn color(&self) -> Color {
        match self.level {
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        }
    }
}

/// Queue of active notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice, dropping the oldest one when at capacity.
    pub fn push(&mut self, notice: Notice) {
        if self.notices.len() >= MAX_VISIBLE_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    pub fn warning<S: Into<String>>(&mut self, message: S) {
        self.push(Notice::new(message.into(), NoticeLevel::Warning));
    }

    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.push(Notice::new(message.into(), NoticeLevel::Error));
    }

    /// Drop expired notices. Called once per frame.
    pub fn tick(&mut self) {
        self.notices.retain(|notice| !notice.is_expired());
    }

    pub fn notices(&self) -> &VecDeque<Notice> {
        &self.notices
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

/// Render active notices as single-line banners stacked in the top-right
/// corner of `area`, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, board: &NoticeBoard) {
    for (index, notice) in board.notices().iter().enumerate() {
        let row = area.y.saturating_add(index as u16);
        if row >= area.y.saturating_add(area.height) {
            break;
        }

        let text = format!(" {} {} ", notice.icon(), notice.message);
        let width = (text.chars().count() as u16).min(area.width);
        let banner_area = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: row,
            width,
            height: 1,
        };

        frame.render_widget(Clear, banner_area);
        let banner = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default()
                .fg(notice.color())
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        )));
        frame.render_widget(banner, banner_area);
    }
}
