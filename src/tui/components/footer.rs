//! Keyboard shortcuts bar component
//!
//! Displays the ticket total and the available keyboard shortcuts at the
//! bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-q", "Space")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Reload")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
    /// Number of tickets in the store, shown on the left
    pub total: Option<usize>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.total.map(|total| element! {
                Text(
                    content: format!("Total tickets: {total}"),
                    color: theme.accent,
                    weight: Weight::Bold,
                )
            }))

            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight_text,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the dashboard ticket table
pub fn dashboard_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_search()
        .with_filters()
        .add("Space", "Mark Used/Unused")
        .add("r", "Reload")
        .add("x", "Dismiss")
        .with_quit()
        .build()
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Apply Search")
        .add("Tab", "Exit Search")
        .add("Esc", "Clear & Exit")
        .add("C-q", "Quit")
        .build()
}

/// Shortcuts shown while loading or after a failed first load
pub fn empty_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("r", "Reload")
        .with_quit()
        .build()
}
