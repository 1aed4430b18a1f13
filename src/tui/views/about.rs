//! About view — project pitch and credits.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::theme;
use crate::tui::services::Services;

pub struct AboutState {
    scroll: usize,
}

impl AboutState {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn load(&mut self, _services: &Services) {}

    pub fn handle_input(&mut self, event: &Event, _services: &Services) -> bool {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event
        else {
            return false;
        };

        if *modifiers != KeyModifiers::NONE && *modifiers != KeyModifiers::SHIFT {
            return false;
        }

        let len = about_lines().len();
        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(len.saturating_sub(1));
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll = 0;
                true
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll = len.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_focused("Meet RoleDoc");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Min(1),    // Pitch
            Constraint::Length(1), // Credits footer
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(about_lines()).scroll((self.scroll as u16, 0)),
            rows[0],
        );

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Made by Bala Karthikeya Aluru • RoleDoc © 2025",
                theme::dim(),
            ))
            .alignment(Alignment::Center),
            rows[1],
        );
    }
}

/// Pitch copy, pre-broken into terminal-width lines.
fn about_lines() -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::raw("  RoleDoc is a smart document assistant that allows you to"),
        Line::raw("  upload, interact, and chat with your documents like never"),
        Line::raw("  before."),
        Line::raw(""),
        Line::raw("  Designed with students, researchers, and professionals in"),
        Line::raw("  mind, our AI-driven interface helps you save time, boost"),
        Line::raw("  productivity, and make document navigation intuitive and"),
        Line::raw("  interactive."),
        Line::raw(""),
        Line::styled("  Why RoleDoc?", theme::heading()),
        Line::raw(""),
        Line::from(vec![
            Span::raw("   📄 "),
            Span::styled(
                "Simple file upload with support for PDF, DOCX, and TXT",
                Style::default().fg(theme::TEXT),
            ),
        ]),
        Line::from(vec![
            Span::raw("   💬 "),
            Span::styled(
                "Natural language interface for querying files",
                Style::default().fg(theme::TEXT),
            ),
        ]),
        Line::from(vec![
            Span::raw("   ⚡ "),
            Span::styled(
                "Fast, secure, and lightweight",
                Style::default().fg(theme::TEXT),
            ),
        ]),
        Line::raw(""),
    ]
}

// ── Tests ───────────────────────────────────────────────────────────────────
