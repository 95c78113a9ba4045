//! Dashboard model types for testable state management
//!
//! This module separates state (ViewState) from view (DashboardViewModel)
//! so the key mapping, filtering and optimistic toggle bookkeeping can be
//! unit tested without the iocraft framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::error::TurnstileError;
use crate::store::{PendingToggle, TicketStore};
use crate::tui::components::empty_state::EmptyStateKind;
use crate::tui::components::footer::Shortcut;
use crate::tui::components::ticket_table::effective_visible_height;
use crate::tui::components::toast::Toast;
use crate::tui::components::{dashboard_shortcuts, empty_shortcuts, search_shortcuts};
use crate::types::{StatusFilter, Ticket};

/// Which part of the dashboard receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Search,
    #[default]
    List,
}

/// Lifecycle of the ticket collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// First load has not completed
    #[default]
    Loading,
    /// At least one load succeeded
    Ready,
    /// The first load failed and none has succeeded since
    Failed,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Local ticket copy and in-flight guard
    pub store: TicketStore,
    /// Current search term
    pub search_query: String,
    /// Active status predicate
    pub status_filter: StatusFilter,
    /// Index of the selected ticket in the visible list
    pub selected_index: usize,
    /// Scroll offset for the table
    pub scroll_offset: usize,
    /// Currently active pane
    pub active_pane: Pane,
    pub load_state: LoadState,
    /// A reload is in flight while data is already shown
    pub is_reloading: bool,
    /// The single banner message, if any
    pub banner: Option<Toast>,
    /// Rows that fit in the table
    pub list_height: usize,
}

/// All possible actions on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    // Navigation
    MoveDown,
    MoveUp,
    GoToTop,
    GoToBottom,
    /// Page down (half page)
    PageDown,
    /// Page up (half page)
    PageUp,

    // Search
    /// Focus the search box
    FocusSearch,
    /// Replace the search term
    UpdateSearch(String),
    /// Leave the search box, keeping the term
    ExitSearch,
    /// Clear the term and leave the search box
    ClearSearchAndExit,

    // Filters
    NextFilter,
    PreviousFilter,
    SetFilter(StatusFilter),

    // Commands handled by the component
    /// Flip `isUsed` on the selected ticket
    ToggleSelected,
    /// Fetch the collection again
    Reload,
    DismissBanner,
    Quit,

    // Async outcomes
    LoadStarted,
    LoadSucceeded(Vec<Ticket>),
    /// Load failed; the payload is the cause for logs
    LoadFailed(String),
    ToggleConfirmed(PendingToggle),
    /// Update failed; the payload is the cause for logs
    ToggleFailed(PendingToggle, String),

    /// Terminal resized; the payload is the new table height in rows
    Resize(usize),
}

/// One table row as rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub ticket: Ticket,
    /// A status update for this ticket is in flight
    pub is_pending: bool,
}

/// Computed view model for rendering the dashboard
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub rows: Vec<RowModel>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub search_query: String,
    pub search_focused: bool,
    pub list_focused: bool,
    pub status_filter: StatusFilter,
    /// Number of tickets passing search and filter
    pub visible_count: usize,
    /// Number of tickets in the store
    pub total_count: usize,
    pub banner: Option<Toast>,
    /// Empty state to display instead of the table (if any)
    pub empty_state: Option<EmptyStateKind>,
    /// Keyboard shortcuts to display in footer
    pub shortcuts: Vec<Shortcut>,
    pub is_reloading: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

fn visible_count(state: &ViewState) -> usize {
    state
        .store
        .visible(&state.search_query, state.status_filter)
        .len()
}

/// Keep the selection inside the visible list and on screen
fn clamp_selection(state: &mut ViewState) {
    let count = visible_count(state);
    if count == 0 {
        state.selected_index = 0;
        state.scroll_offset = 0;
        return;
    }
    state.selected_index = state.selected_index.min(count - 1);
    state.scroll_offset = state.scroll_offset.min(state.selected_index);
    follow_selection(state, count);
}

fn follow_selection(state: &mut ViewState, list_count: usize) {
    state.scroll_offset = adjust_scroll(
        state.scroll_offset,
        state.selected_index,
        state.list_height,
        list_count,
    );
}

fn reset_selection(state: &mut ViewState) {
    state.selected_index = 0;
    state.scroll_offset = 0;
}

/// Compute the view model from state
pub fn compute_view_model(state: &ViewState) -> DashboardViewModel {
    let rows: Vec<RowModel> = state
        .store
        .visible(&state.search_query, state.status_filter)
        .into_iter()
        .map(|ticket| RowModel {
            is_pending: state.store.is_in_flight(&ticket.ticket_id),
            ticket: ticket.clone(),
        })
        .collect();

    let empty_state = match state.load_state {
        LoadState::Loading => Some(EmptyStateKind::Loading),
        LoadState::Failed if state.store.is_empty() => Some(EmptyStateKind::LoadFailed),
        _ if rows.is_empty() && !state.search_query.trim().is_empty() => {
            Some(EmptyStateKind::NoResults)
        }
        _ if rows.is_empty() => Some(EmptyStateKind::NoTickets),
        _ => None,
    };

    let shortcuts = if state.active_pane == Pane::Search {
        search_shortcuts()
    } else if empty_state.is_some_and(EmptyStateKind::is_blocking) {
        empty_shortcuts()
    } else {
        dashboard_shortcuts()
    };

    DashboardViewModel {
        visible_count: rows.len(),
        total_count: state.store.len(),
        rows,
        selected_index: state.selected_index,
        scroll_offset: state.scroll_offset,
        search_query: state.search_query.clone(),
        search_focused: state.active_pane == Pane::Search,
        list_focused: state.active_pane == Pane::List,
        status_filter: state.status_filter,
        banner: state.banner.clone(),
        empty_state,
        shortcuts,
        is_reloading: state.is_reloading,
    }
}

/// Apply an action to state (reducer pattern)
///
/// Actions that need I/O or the system context (ToggleSelected, Reload,
/// Quit) are left untouched here and handled by the component.
pub fn reduce_view_state(mut state: ViewState, action: ViewAction) -> ViewState {
    let list_count = visible_count(&state);
    let list_height = state.list_height;

    match action {
        // Navigation
        ViewAction::MoveDown => {
            if list_count > 0 {
                state.selected_index = (state.selected_index + 1).min(list_count - 1);
                follow_selection(&mut state, list_count);
            }
        }
        ViewAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            follow_selection(&mut state, list_count);
        }
        ViewAction::GoToTop => reset_selection(&mut state),
        ViewAction::GoToBottom => {
            if list_count > 0 {
                state.selected_index = list_count - 1;
                follow_selection(&mut state, list_count);
            }
        }
        ViewAction::PageDown => {
            if list_count > 0 {
                let jump = (list_height / 2).max(1);
                state.selected_index = (state.selected_index + jump).min(list_count - 1);
                follow_selection(&mut state, list_count);
            }
        }
        ViewAction::PageUp => {
            let jump = (list_height / 2).max(1);
            state.selected_index = state.selected_index.saturating_sub(jump);
            follow_selection(&mut state, list_count);
        }

        // Search
        ViewAction::FocusSearch => state.active_pane = Pane::Search,
        ViewAction::UpdateSearch(query) => {
            state.search_query = query;
            reset_selection(&mut state);
        }
        ViewAction::ExitSearch => state.active_pane = Pane::List,
        ViewAction::ClearSearchAndExit => {
            state.search_query.clear();
            state.active_pane = Pane::List;
            reset_selection(&mut state);
        }

        // Filters
        ViewAction::NextFilter => {
            state.status_filter = state.status_filter.next();
            reset_selection(&mut state);
        }
        ViewAction::PreviousFilter => {
            state.status_filter = state.status_filter.previous();
            reset_selection(&mut state);
        }
        ViewAction::SetFilter(filter) => {
            if state.status_filter != filter {
                state.status_filter = filter;
                reset_selection(&mut state);
            }
        }

        ViewAction::DismissBanner => state.banner = None,

        // Async outcomes
        ViewAction::LoadStarted => {
            if state.load_state == LoadState::Ready {
                state.is_reloading = true;
            } else {
                state.load_state = LoadState::Loading;
            }
        }
        ViewAction::LoadSucceeded(tickets) => {
            state.store.replace(tickets);
            state.load_state = LoadState::Ready;
            state.is_reloading = false;
            clamp_selection(&mut state);
        }
        ViewAction::LoadFailed(detail) => {
            if state.load_state != LoadState::Ready {
                state.load_state = LoadState::Failed;
            }
            state.is_reloading = false;
            state.banner = Some(Toast::error(
                TurnstileError::LoadFailure(detail).to_string(),
            ));
        }
        ViewAction::ToggleConfirmed(pending) => state.store.confirm_toggle(&pending),
        ViewAction::ToggleFailed(pending, reason) => {
            state.store.rollback_toggle(&pending);
            state.banner = Some(Toast::error(
                TurnstileError::UpdateFailure {
                    ticket_id: pending.ticket_id,
                    reason,
                }
                .to_string(),
            ));
            clamp_selection(&mut state);
        }

        ViewAction::Resize(height) => {
            state.list_height = height;
            clamp_selection(&mut state);
        }

        ViewAction::ToggleSelected | ViewAction::Reload | ViewAction::Quit => {}
    }
    state
}

/// Start an optimistic toggle on the selected ticket.
///
/// Returns the pending toggle to send to the service, or `None` when there
/// is nothing selected or the ticket already has an update in flight. A
/// rejected attempt leaves a warning banner and no other change.
pub fn begin_toggle_selected(state: &mut ViewState) -> Option<PendingToggle> {
    let (ticket_id, current) = {
        let visible = state
            .store
            .visible(&state.search_query, state.status_filter);
        let ticket = visible.get(state.selected_index)?;
        (ticket.ticket_id.clone(), ticket.is_used)
    };

    match state.store.begin_toggle(&ticket_id, current) {
        Ok(pending) => {
            clamp_selection(state);
            Some(pending)
        }
        Err(e) => {
            state.banner = Some(Toast::warning(e.to_string()));
            None
        }
    }
}

/// Get the currently selected ticket
pub fn get_selected_ticket(state: &ViewState) -> Option<Ticket> {
    state
        .store
        .visible(&state.search_query, state.status_filter)
        .get(state.selected_index)
        .map(|t| (*t).clone())
}

/// Adjust scroll offset to keep the selected row visible
///
/// The table gives up a line to each "more above/below" indicator, so the
/// window is measured with those lines taken out.
pub fn adjust_scroll(
    scroll_offset: usize,
    selected_index: usize,
    list_height: usize,
    total_count: usize,
) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    let mut offset = scroll_offset;
    while selected_index >= offset + effective_visible_height(offset, list_height, total_count) {
        offset += 1;
    }
    offset
}

/// Convert a key event to a ViewAction
///
/// Returns `None` if the key doesn't map to any action.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    active_pane: Pane,
) -> Option<ViewAction> {
    if active_pane == Pane::Search {
        return search_key_to_action(code, modifiers);
    }

    match code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(ViewAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(ViewAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(ViewAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(ViewAction::GoToBottom),
        KeyCode::PageDown => Some(ViewAction::PageDown),
        KeyCode::PageUp => Some(ViewAction::PageUp),

        // Search and filters
        KeyCode::Char('/') => Some(ViewAction::FocusSearch),
        KeyCode::Char('f') | KeyCode::Tab => Some(ViewAction::NextFilter),
        KeyCode::Char('F') | KeyCode::BackTab => Some(ViewAction::PreviousFilter),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|n| StatusFilter::from_shortcut(n as usize))
            .map(ViewAction::SetFilter),

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('u') => Some(ViewAction::ToggleSelected),
        KeyCode::Char('r') => Some(ViewAction::Reload),
        KeyCode::Char('x') => Some(ViewAction::DismissBanner),
        KeyCode::Char('q') | KeyCode::Esc => Some(ViewAction::Quit),

        _ => None,
    }
}

/// Convert a key event in search mode to a ViewAction
fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<ViewAction> {
    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(ViewAction::ClearSearchAndExit),
        (KeyCode::Enter, _) | (KeyCode::Tab, _) => Some(ViewAction::ExitSearch),
        (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => Some(ViewAction::Quit),
        // Other characters are handled by the search box component
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
