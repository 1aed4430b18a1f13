//! Centralized Indigo & Amber color theme for the RoleDoc TUI.
//!
//! The palette mirrors the Tailwind shades the web frontend ships with, so
//! the terminal and browser versions read as the same product. All constants
//! are RGB truecolor; views import from here instead of using inline
//! `Color::*` literals.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Indigo 600. Primary accent: active items, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x4F, 0x46, 0xE5);
/// Indigo 400. Highlights, hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x81, 0x8C, 0xF8);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Amber 500. Calls to action, badges, important items.
pub const ACCENT: Color = Color::Rgb(0xF5, 0x9E, 0x0B);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Midnight base background.
pub const BG_BASE: Color = Color::Rgb(0x0E, 0x10, 0x1E);
/// Elevated surfaces: navbar, status bar.
pub const BG_SURFACE: Color = Color::Rgb(0x17, 0x1A, 0x2E);

// ── Text ────────────────────────────────────────────────────────────────────

/// Slate 200. Primary text.
pub const TEXT: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
/// Slate 400. Secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
/// Slate 600. Disabled items, faint hints, resting borders.
pub const TEXT_DIM: Color = Color::Rgb(0x47, 0x51, 0x69);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Red 400. Failures, destructive actions.
pub const ERROR: Color = Color::Rgb(0xF8, 0x71, 0x71);
/// Green 400. Confirmations, healthy status.
pub const SUCCESS: Color = Color::Rgb(0x4A, 0xDE, 0x80);
/// Yellow 500. Degraded status.
pub const WARNING: Color = Color::Rgb(0xEA, 0xB3, 0x08);
/// Blue 400. Informational highlights.
pub const INFO: Color = Color::Rgb(0x60, 0xA5, 0xFA);

// ── Domain ──────────────────────────────────────────────────────────────────

/// Sky 300. The document preview pane.
pub const DOC: Color = Color::Rgb(0x7D, 0xD3, 0xFC);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Section header style.
pub fn heading() -> Style {
    Style::new().fg(PRIMARY).bold()
}

/// Border of the pane holding keyboard focus.
pub fn border_focused() -> Style {
    Style::new().fg(PRIMARY)
}

/// Border of a pane at rest.
pub fn border_default() -> Style {
    Style::new().fg(TEXT_DIM)
}

/// Selected list or menu item.
pub fn highlight() -> Style {
    Style::new().fg(ACCENT).bold()
}

/// Secondary label text.
pub fn muted() -> Style {
    Style::new().fg(TEXT_MUTED)
}

/// Faint text for disabled or background items.
pub fn dim() -> Style {
    Style::new().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::new().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::new().fg(BG_BASE).bg(ACCENT).bold()
}

/// Insert mode badge.
pub fn insert_badge() -> Style {
    Style::new().fg(BG_BASE).bg(PRIMARY_LIGHT).bold()
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block carrying focus styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_indigo() {
        assert_eq!(PRIMARY, Color::Rgb(0x4F, 0x46, 0xE5));
    }

    #[test]
    fn test_accent_is_amber() {
        assert_eq!(ACCENT, Color::Rgb(0xF5, 0x9E, 0x0B));
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        let set = [ERROR, SUCCESS, WARNING, INFO, ACCENT];
        for (i, a) in set.iter().enumerate() {
            for b in set.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(heading(), Style::default());
        assert_ne!(highlight(), Style::default());
        assert_ne!(muted(), Style::default());
        assert_ne!(key_hint(), Style::default());
    }
}
