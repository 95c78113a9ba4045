//! Terminal dashboard for the ticket desk
//!
//! - `dashboard` - ticket table with search, filters and the used toggle
//! - `components` - shared building blocks

pub mod components;
pub mod dashboard;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps};
pub use theme::Theme;
