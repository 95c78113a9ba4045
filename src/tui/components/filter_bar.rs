//! Status filter bar
//!
//! One tab per status filter, numbered for the 1-5 shortcuts, with the
//! active filter highlighted.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::StatusFilter;

#[derive(Default, Props)]
pub struct FilterBarProps {
    pub active: StatusFilter,
}

#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
        ) {
            #(StatusFilter::ALL.iter().enumerate().map(|(i, filter)| {
                let is_active = *filter == props.active;
                element! {
                    View(
                        flex_direction: FlexDirection::Row,
                        background_color: if is_active { Some(theme.accent) } else { None },
                        padding_left: 1,
                        padding_right: 1,
                        margin_right: 1,
                    ) {
                        Text(
                            content: format!("{} {}", i + 1, filter.label()),
                            color: if is_active { Color::Black } else { theme.text_dimmed },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }
            }))
        }
    }
}
