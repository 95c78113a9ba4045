//! Search input component
//!
//! A bordered text input for the ticket search term. The term itself lives
//! in the dashboard state; edits are reported through `on_change`.

use iocraft::prelude::*;

use crate::tui::theme::theme;

pub const SEARCH_PLACEHOLDER: &str = "Search tickets by ID, email or category...";

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// Current search term
    pub value: String,
    /// Whether the search box has focus
    pub has_focus: bool,
    /// Called with the new term on every edit
    pub on_change: HandlerMut<'static, String>,
}

/// Search input with a "/" prompt
#[component]
pub fn SearchBox(props: &mut SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let show_placeholder = props.value.is_empty() && !props.has_focus;

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "/",
                    color: if props.has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }
            View(flex_grow: 1.0) {
                #(if show_placeholder {
                    element! {
                        Text(content: SEARCH_PLACEHOLDER, color: theme.text_dimmed)
                    }
                    .into_any()
                } else {
                    element! {
                        TextInput(
                            value: props.value.clone(),
                            has_focus: props.has_focus,
                            on_change: std::mem::take(&mut props.on_change),
                            color: theme.text,
                        )
                    }
                    .into_any()
                })
            }
        }
    }
}
