//! Empty state component
//!
//! Shown in place of the ticket table while loading, when a first load
//! failed, or when nothing passes the current search and filter.

use iocraft::prelude::*;

use crate::error::TurnstileError;
use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// First load still outstanding
    Loading,
    /// First load failed and nothing has been loaded since
    LoadFailed,
    /// Nothing to show and no search term
    #[default]
    NoTickets,
    /// Nothing matches a non-empty search term
    NoResults,
}

impl EmptyStateKind {
    /// Whether this state replaces the whole table area (as opposed to an
    /// empty result inside a working table)
    pub fn is_blocking(self) -> bool {
        matches!(self, EmptyStateKind::Loading | EmptyStateKind::LoadFailed)
    }

    pub fn message(self) -> String {
        match self {
            EmptyStateKind::Loading => "Loading tickets...".to_string(),
            EmptyStateKind::LoadFailed => TurnstileError::LoadFailure(String::new()).to_string(),
            EmptyStateKind::NoTickets | EmptyStateKind::NoResults => {
                "No tickets found.".to_string()
            }
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            EmptyStateKind::LoadFailed => Some("Press 'r' to try again."),
            EmptyStateKind::NoResults => Some("Try adjusting your search."),
            EmptyStateKind::Loading | EmptyStateKind::NoTickets => None,
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
}

/// Centered message with an optional hint
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let color = match props.kind {
        EmptyStateKind::Loading => theme.accent,
        EmptyStateKind::LoadFailed => theme.error,
        EmptyStateKind::NoTickets | EmptyStateKind::NoResults => theme.text_dimmed,
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            Text(
                content: props.kind.message(),
                color: color,
                weight: Weight::Bold,
            )

            #(props.kind.hint().map(|hint| element! {
                View(margin_top: 1) {
                    Text(
                        content: hint,
                        color: theme.text_dimmed,
                    )
                }
            }))
        }
    }
}
