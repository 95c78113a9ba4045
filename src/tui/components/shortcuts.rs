//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k, g/G and paging
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("g/G", "Top/Bottom"));
        self.shortcuts
            .push(Shortcut::new("PgUp/PgDn", "Page Up/Dn"));
        self
    }

    /// Add / for search
    pub fn with_search(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self
    }

    /// Add f/F and 1-5 for the status filter
    pub fn with_filters(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("f/F", "Next/Prev Filter"));
        self.shortcuts.push(Shortcut::new("1-5", "Pick Filter"));
        self
    }

    /// Add q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
