//! Banner notifications
//!
//! The dashboard shows at most one banner at a time. It stays until the
//! operator dismisses it or a newer message replaces it.

use iocraft::prelude::*;
use std::time::Instant;

use crate::tui::theme::theme;

/// A banner message
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level of the toast
    pub level: ToastLevel,
    /// When the toast was created
    pub timestamp: Instant,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

impl Toast {
    /// Create a new toast with the given message and level
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            timestamp: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => theme().error,
        }
    }
}

/// Render a banner as an optional element
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    let theme = theme();
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                border_edges: Edges::Left,
                border_style: BorderStyle::Bold,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
                Text(content: "[x] dismiss", color: theme.text_dimmed)
            }
        }
        .into_any()
    })
}
