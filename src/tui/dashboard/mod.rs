//! Ticket dashboard (`turnstile dashboard`)
//!
//! Interactive table of festival tickets with search, status filters and
//! an optimistic "mark used" toggle.

pub mod model;

use std::sync::Arc;

use iocraft::prelude::*;
use jiff::tz::TimeZone;

use crate::error::TurnstileError;
use crate::remote::{HttpTicketService, TicketService};
use crate::store::PendingToggle;
use crate::tui::components::{
    EmptyState, FilterBar, Footer, Header, SearchBox, TicketRowView, TicketTable, render_toast,
};
use crate::tui::theme::theme;

pub use model::{
    DashboardViewModel, LoadState, Pane, ViewAction, ViewState, begin_toggle_selected,
    compute_view_model, key_to_action, reduce_view_state,
};

/// Lines taken by everything except table rows: header, search box,
/// filter bar, footer, table border and column header
const CHROME_LINES: usize = 9;
/// Extra lines while a banner is shown
const BANNER_LINES: usize = 3;

const SUBTITLE: &str = "Event Ticket Management";

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {
    /// Service used to load and update tickets
    pub service: Option<Arc<HttpTicketService>>,
    /// Prefix for amounts
    pub currency_symbol: String,
}

fn dispatch(state: &mut State<ViewState>, action: ViewAction) {
    let mut guard = state.write();
    let current = std::mem::take(&mut *guard);
    *guard = reduce_view_state(current, action);
}

/// Main dashboard component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                     N of M tickets |
/// +------------------------------------------+
/// | / search...                              |
/// +------------------------------------------+
/// | 1 All  2 Used  3 Unused  4 Paid  5 Pend  |
/// | Banner (optional)                         |
/// +------------------------------------------+
/// | Ticket table                              |
/// |                                           |
/// +------------------------------------------+
/// | Total tickets: M      Footer shortcuts    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Dashboard<'a>(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut state: State<ViewState> = hooks.use_state(ViewState::default);
    let mut should_exit = hooks.use_state(|| false);

    let load_handler: Handler<()> = hooks.use_async_handler({
        let service = props.service.clone();
        let state_setter = state;

        move |()| {
            let service = service.clone();
            let mut state_setter = state_setter;

            async move {
                let action = match service {
                    Some(service) => match service.list_tickets().await {
                        Ok(tickets) => ViewAction::LoadSucceeded(tickets),
                        Err(e) => ViewAction::LoadFailed(e.detail()),
                    },
                    None => ViewAction::LoadFailed("no ticket service".to_string()),
                };
                dispatch(&mut state_setter, action);
            }
        }
    });

    let toggle_handler: Handler<PendingToggle> = hooks.use_async_handler({
        let service = props.service.clone();
        let state_setter = state;

        move |pending: PendingToggle| {
            let service = service.clone();
            let mut state_setter = state_setter;

            async move {
                let result = match service {
                    Some(service) => {
                        service
                            .set_used(&pending.ticket_id, pending.requested)
                            .await
                    }
                    None => Err(TurnstileError::Other("no ticket service".to_string())),
                };
                let action = match result {
                    Ok(()) => ViewAction::ToggleConfirmed(pending),
                    Err(e) => {
                        tracing::warn!(
                            ticket_id = %pending.ticket_id,
                            detail = %e.detail(),
                            "rolling back ticket toggle"
                        );
                        ViewAction::ToggleFailed(pending, e.detail())
                    }
                };
                dispatch(&mut state_setter, action);
            }
        }
    });

    // Trigger initial load on mount
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(());
    }

    let banner_lines = if state.read().banner.is_some() {
        BANNER_LINES
    } else {
        0
    };
    let list_height = (height as usize).saturating_sub(CHROME_LINES + banner_lines);
    if state.read().list_height != list_height {
        dispatch(&mut state, ViewAction::Resize(list_height));
    }

    hooks.use_terminal_events({
        let load_handler = load_handler.clone();
        let toggle_handler = toggle_handler.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let pane = state.read().active_pane;
                let Some(action) = key_to_action(code, modifiers, pane) else {
                    return;
                };

                match action {
                    ViewAction::Quit => should_exit.set(true),
                    ViewAction::Reload => {
                        let busy = {
                            let current = state.read();
                            current.is_reloading || current.load_state == LoadState::Loading
                        };
                        if !busy {
                            dispatch(&mut state, ViewAction::LoadStarted);
                            load_handler.clone()(());
                        }
                    }
                    ViewAction::ToggleSelected => {
                        let pending = {
                            let mut guard = state.write();
                            begin_toggle_selected(&mut guard)
                        };
                        if let Some(pending) = pending {
                            toggle_handler.clone()(pending);
                        }
                    }
                    other => dispatch(&mut state, other),
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let vm = compute_view_model(&state.read());
    let tz = TimeZone::system();
    let rows: Vec<TicketRowView> = vm
        .rows
        .iter()
        .map(|row| TicketRowView::new(&row.ticket, &props.currency_symbol, &tz, row.is_pending))
        .collect();

    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                subtitle: Some(SUBTITLE),
                visible_count: Some(vm.visible_count),
                total_count: Some(vm.total_count),
                reloading: vm.is_reloading,
            )

            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
            ) {
                SearchBox(
                    value: vm.search_query.clone(),
                    has_focus: vm.search_focused,
                    on_change: move |value: String| {
                        dispatch(&mut state, ViewAction::UpdateSearch(value));
                    },
                )
            }

            FilterBar(active: vm.status_filter)

            #(render_toast(&vm.banner))

            View(
                flex_grow: 1.0,
                width: 100pct,
            ) {
                #(match vm.empty_state {
                    Some(kind) => element! {
                        EmptyState(kind)
                    }
                    .into_any(),
                    None => element! {
                        TicketTable(
                            rows: rows,
                            selected_index: vm.selected_index,
                            scroll_offset: vm.scroll_offset,
                            has_focus: vm.list_focused,
                            visible_height: list_height,
                        )
                    }
                    .into_any(),
                })
            }

            Footer(
                shortcuts: vm.shortcuts.clone(),
                total: Some(vm.visible_count),
            )
        }
    }
}
