//! Root layout computation for navbar + main content + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the navigation bar (bordered single row).
pub const NAVBAR_HEIGHT: u16 = 3;
/// Extra rows the hamburger dropdown adds, one per nav link.
pub const MENU_ROWS: u16 = 4;
/// Collapse the link row into a hamburger below this terminal width.
pub const AUTO_HAMBURGER_THRESHOLD: u16 = 48;
/// Hide the navbar entirely below this terminal height.
pub const HIDE_NAVBAR_HEIGHT: u16 = 8;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Navbar area across the top (None if hidden).
    pub navbar: Option<Rect>,
    /// Main content area.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

/// Navbar presentation derived from terminal size and the focused view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVisibility {
    /// Brand plus inline link row.
    Bar,
    /// Brand plus a hamburger toggle; links drop down when open.
    Hamburger,
    Hidden,
}

impl AppLayout {
    /// Compute layout regions from the terminal area and navbar state.
    ///
    /// `show_navbar`: false for views that own the whole screen (chat).
    /// `menu_open`: the hamburger dropdown is unfolded.
    /// Returns the layout and effective navbar visibility.
    pub fn compute(area: Rect, show_navbar: bool, menu_open: bool) -> (Self, NavbarVisibility) {
        let visibility = if !show_navbar || area.height < HIDE_NAVBAR_HEIGHT {
            NavbarVisibility::Hidden
        } else if area.width < AUTO_HAMBURGER_THRESHOLD {
            NavbarVisibility::Hamburger
        } else {
            NavbarVisibility::Bar
        };

        let navbar_height = match visibility {
            NavbarVisibility::Hidden => 0,
            NavbarVisibility::Bar => NAVBAR_HEIGHT,
            NavbarVisibility::Hamburger => {
                if menu_open {
                    NAVBAR_HEIGHT + MENU_ROWS
                } else {
                    NAVBAR_HEIGHT
                }
            }
        };

        if navbar_height == 0 {
            let rows = Layout::vertical([
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);
            return (
                AppLayout {
                    navbar: None,
                    main: rows[0],
                    status: rows[1],
                },
                visibility,
            );
        }

        let rows = Layout::vertical([
            Constraint::Length(navbar_height), // Navbar
            Constraint::Min(1),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

        (
            AppLayout {
                navbar: Some(rows[0]),
                main: rows[1],
                status: rows[2],
            },
            visibility,
        )
    }
}
