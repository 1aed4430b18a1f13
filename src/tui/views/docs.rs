//! Documentation view — the static usage guide.
//!
//! Content is authored as pre-broken lines so scrolling works on plain
//! row offsets, same as the upload view's log pane.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::super::theme;
use crate::tui::services::Services;

pub struct DocsState {
    scroll: usize,
}

impl DocsState {
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

        let len = docs_lines().len();
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
            KeyCode::PageDown => {
                self.scroll = (self.scroll + 10).min(len.saturating_sub(1));
                true
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_focused("Documentation.");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Min(1),    // Guide text
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

        let lines = docs_lines();
        let total = lines.len();
        frame.render_widget(
            Paragraph::new(lines).scroll((self.scroll as u16, 0)),
            rows[0],
        );

        if total > rows[0].height as usize {
            let mut scrollbar_state = ScrollbarState::new(total)
                .position(self.scroll)
                .viewport_content_length(rows[0].height as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                rows[0],
                &mut scrollbar_state,
            );
        }

        frame.render_widget(
            Paragraph::new(Line::styled(
                "  [j/k] scroll  [g/G] top/bottom  [Tab] switch view",
                theme::key_hint(),
            )),
            rows[1],
        );
    }
}

/// The guide, line by line. Quotes and phrasing match the web copy.
fn docs_lines() -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::styled("  Your go-to guide for working with RoleDoc.", theme::muted()),
        Line::raw(""),
        Line::styled("  Getting Started", theme::heading()),
        Line::raw("  To begin, visit the Upload page and choose a supported document"),
        Line::raw("  format (PDF, DOCX, TXT). Uploading is fast and secure, and your"),
        Line::raw("  file stays local unless otherwise specified."),
        Line::raw(""),
        Line::styled("  Uploading a File", theme::heading()),
        Line::raw("   • Click the \"Upload\" button in the navigation bar."),
        Line::raw("   • Drag-and-drop your document or use the file picker."),
        Line::raw("   • Only PDFs, Word docs (.docx), or plain text (.txt) files"),
        Line::raw("     are allowed."),
        Line::raw(""),
        Line::styled("  Chatting with the Document", theme::heading()),
        Line::raw("  Once uploaded, you'll be redirected to the chat interface."),
        Line::raw("  You can ask natural language questions about the content of"),
        Line::raw("  your file — like \"Summarize this document\" or \"What are the"),
        Line::raw("  main points from chapter 2?\""),
        Line::raw(""),
        Line::styled("  Tips for Best Results", theme::heading()),
        Line::raw("   • Use clean, text-based files (avoid scanned PDFs)."),
        Line::raw("   • Ask specific questions for sharper answers."),
        Line::raw("   • PDFs usually yield better formatting in responses."),
        Line::raw(""),
        Line::styled("  FAQ", theme::heading()),
        Line::raw("  Q: Is my document stored?"),
        Line::raw("  A: No, documents are processed locally unless you implement"),
        Line::raw("     server storage."),
        Line::raw(""),
        Line::raw("  Q: Can I upload multiple files?"),
        Line::raw("  A: Currently, we support one file at a time. Multi-doc chat"),
        Line::raw("     is in the works."),
        Line::raw(""),
    ]
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::tui::events::AppEvent;
    use tokio::sync::mpsc;

    fn test_services() -> (Services, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Services::init(AppConfig::default(), tx), rx)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_scroll_clamps_at_bounds() {
        let (services, _rx) = test_services();
        let mut state = DocsState::new();

        assert!(state.handle_input(&key(KeyCode::Char('k')), &services));
        assert_eq!(state.scroll, 0);

        state.handle_input(&key(KeyCode::Char('G')), &services);
        let bottom = state.scroll;
        assert_eq!(bottom, docs_lines().len() - 1);

        state.handle_input(&key(KeyCode::Char('j')), &services);
        assert_eq!(state.scroll, bottom);

        state.handle_input(&key(KeyCode::Char('g')), &services);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_page_keys_move_ten_rows() {
        let (services, _rx) = test_services();
        let mut state = DocsState::new();

        state.handle_input(&key(KeyCode::PageDown), &services);
        assert_eq!(state.scroll, 10);
        state.handle_input(&key(KeyCode::PageUp), &services);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_unhandled_key_falls_through() {
        let (services, _rx) = test_services();
        let mut state = DocsState::new();
        assert!(!state.handle_input(&key(KeyCode::Char('x')), &services));
    }

    #[test]
    fn test_guide_covers_formats_and_faq() {
        let text: String = docs_lines()
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("PDF, DOCX, TXT"));
        assert!(text.contains("one file at a time"));
        assert!(text.contains("Is my document stored?"));
    }
}
