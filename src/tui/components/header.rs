//! App header bar component
//!
//! Displays the festival title, subtitle and the visible/total ticket count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

pub const DEFAULT_TITLE: &str = "X REPUBLIK";

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "X REPUBLIK")
    pub title: Option<&'a str>,

    /// Subtitle
    pub subtitle: Option<&'a str>,

    /// Number of tickets passing the current search and filter
    pub visible_count: Option<usize>,

    /// Number of tickets in the store
    pub total_count: Option<usize>,

    /// Whether a reload is in flight
    pub reloading: bool,
}

/// App header bar showing title and ticket counts
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let title = props.title.unwrap_or(DEFAULT_TITLE);

    let count_text = match (props.visible_count, props.total_count) {
        (Some(visible), Some(total)) if visible != total => {
            Some(format!("{visible} of {total} tickets"))
        }
        (_, Some(total)) => Some(format!("{total} tickets")),
        (Some(visible), None) => Some(format!("{visible} tickets")),
        (None, None) => None,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: title,
                    color: theme.title,
                    weight: Weight::Bold,
                )
                #(props.subtitle.map(|sub| element! {
                    Text(content: sub, color: theme.accent)
                }))
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(if props.reloading {
                    Some(element! {
                        Text(content: "Reloading...", color: theme.accent)
                    })
                } else {
                    None
                })

                #(count_text.map(|text| element! {
                    Text(content: text, color: theme.text_dimmed)
                }))
            }
        }
    }
}
