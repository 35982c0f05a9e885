//! Layout definitions for the TUI
//!
//! Tab bar on top, the active view in the middle, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the Scribe view
pub struct ScribeLayout {
    /// Entry box
    pub input: Rect,
    /// Feedback line under the entry box
    pub feedback: Rect,
    /// Recent records preview
    pub recent: Rect,
}

impl ScribeLayout {
    /// Calculate scribe view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Length(3), // Feedback
                Constraint::Min(3),    // Recent
            ])
            .split(area);

        Self {
            input: chunks[0],
            feedback: chunks[1],
            recent: chunks[2],
        }
    }
}

/// Layout for the Treasury view
pub struct TreasuryLayout {
    /// Income / expense / balance cards
    pub totals: Rect,
    /// Category gauges
    pub categories: Rect,
    /// Narrative report
    pub report: Rect,
}

impl TreasuryLayout {
    /// Calculate treasury view layout
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Totals
                Constraint::Min(5),    // Body
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(vertical[1]);

        Self {
            totals: vertical[0],
            categories: body[0],
            report: body[1],
        }
    }
}
