//! Chat view — converse with the uploaded document beside a preview pane.
//!
//! Left pane holds the transcript and a modal composer (normal/insert,
//! vim-style). Right pane previews the document: text files show their
//! first lines, binary kinds a metadata card, and before any upload a
//! placeholder points the user at the upload view.
//!
//! A turn starts when the composer submits: the user line lands in the
//! transcript immediately, the query runs in a background task, and the
//! reply (persona-decorated answer, literal backend error, or a rotating
//! transport-failure excuse) lands when the app routes the outcome back
//! here.
//!
//! Keybinds (normal): `i/a/Enter` insert, `j/k` scroll, `g/G` top/bottom,
//! `p/P` cycle persona.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::super::theme;

use crate::core::backend::{BackendError, QueryResponse};
use crate::core::document::{UploadedDocumentRef, DEFAULT_DISPLAY_NAME};
use crate::core::session::{ChatMessage, ChatSession, Role};
use crate::tui::events::AppEvent;
use crate::tui::services::Services;
use crate::tui::widgets::input_buffer::InputBuffer;

// ============================================================================
// Types
// ============================================================================

/// Composer focus, vim style. Normal scrolls the transcript, Insert types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatInputMode {
    Normal,
    Insert,
}

/// Lines of a text document loaded into the preview pane.
const PREVIEW_MAX_LINES: usize = 200;

/// Shown in the preview pane before any upload.
const PREVIEW_PLACEHOLDER: &str =
    "No document uploaded. Please upload a file to view it here.";

// ============================================================================
// State
// ============================================================================

pub struct ChatState {
    session: ChatSession,
    doc: Option<UploadedDocumentRef>,
    preview: Option<Vec<String>>,
    input_mode: ChatInputMode,
    input: InputBuffer,
    scroll_offset: usize,
    auto_scroll: bool,
    /// Max scroll position captured during the last render.
    last_max_scroll: usize,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(DEFAULT_DISPLAY_NAME),
            doc: None,
            preview: None,
            input_mode: ChatInputMode::Normal,
            input: InputBuffer::new(),
            scroll_offset: 0,
            auto_scroll: true,
            last_max_scroll: 0,
        }
    }

    pub fn input_mode(&self) -> ChatInputMode {
        self.input_mode
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Adopt a freshly uploaded document: new session, new preview, and
    /// the composer drops straight into insert mode.
    pub fn open_document(&mut self, doc: UploadedDocumentRef) {
        log::info!("Opening chat for {}", doc.file_name);
        self.session = ChatSession::new(doc.file_name.clone());
        self.preview = doc.text_preview(PREVIEW_MAX_LINES);
        self.doc = Some(doc);
        self.input.clear();
        self.input_mode = ChatInputMode::Insert;
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    /// Called when the view gains focus. Re-reads the preview so edits
    /// made to the file on disk since the upload show up.
    pub fn load(&mut self, _services: &Services) {
        if let Some(doc) = &self.doc {
            self.preview = doc.text_preview(PREVIEW_MAX_LINES);
        }
    }

    /// Route the outcome of a `/query` round-trip into the session.
    pub fn on_query_done(&mut self, outcome: Result<QueryResponse, BackendError>) {
        self.session.complete_turn(outcome);
        self.auto_scroll = true;
    }

    // ========================================================================
    // Input handling
    // ========================================================================

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        // Bracketed paste goes straight into the composer while typing.
        if let Event::Paste(text) = event {
            if self.input_mode == ChatInputMode::Insert {
                self.input.insert_str(text);
                return true;
            }
            return false;
        }

        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event
        else {
            return false;
        };

        match self.input_mode {
            ChatInputMode::Insert => self.handle_insert_input(*modifiers, *code, services),
            ChatInputMode::Normal => self.handle_normal_input(*modifiers, *code),
        }
    }

    fn handle_insert_input(
        &mut self,
        modifiers: KeyModifiers,
        code: KeyCode,
        services: &Services,
    ) -> bool {
        // Ctrl+C and tab switching stay global even while typing.
        let ctrl_c = modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c');
        if ctrl_c || matches!(code, KeyCode::Tab | KeyCode::BackTab) {
            return false;
        }

        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Esc) => self.input_mode = ChatInputMode::Normal,
            (KeyModifiers::NONE, KeyCode::Enter) if !self.input.is_empty() => {
                self.send_message(services)
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => self.input.backspace(),
            (KeyModifiers::NONE, KeyCode::Delete) => self.input.delete(),
            (KeyModifiers::NONE, KeyCode::Left) => self.input.move_left(),
            (KeyModifiers::NONE, KeyCode::Right) => self.input.move_right(),
            (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.input.move_home()
            }
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.input.move_end()
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.input.clear(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c)
            }
            // Everything else is swallowed so stray chords don't leak out
            // of the composer.
            _ => {}
        }
        true
    }

    fn handle_normal_input(&mut self, modifiers: KeyModifiers, code: KeyCode) -> bool {
        if !matches!(modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
            return false;
        }

        match code {
            KeyCode::Char('i' | 'a') | KeyCode::Enter => self.input_mode = ChatInputMode::Insert,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to_bottom(),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to_top(),
            KeyCode::Char('p') => {
                let next = self.session.persona().next();
                log::debug!("Persona -> {}", next.label());
                self.session.set_persona(next);
            }
            KeyCode::Char('P') => {
                let prev = self.session.persona().prev();
                self.session.set_persona(prev);
            }
            _ => return false,
        }
        true
    }

    /// Submit the composer: optimistic user turn, then the query runs in
    /// a background task. No-op while a reply is already pending.
    fn send_message(&mut self, services: &Services) {
        if self.session.is_sending() {
            log::debug!("Composer submit ignored while a reply is pending");
            return;
        }

        let text = self.input.take();
        let Some(outbound) = self.session.begin_turn(&text) else {
            return;
        };
        self.auto_scroll = true;

        let backend = services.backend.clone();
        let tx = services.event_tx.clone();
        tokio::spawn(async move {
            let result = backend.query(&outbound.query, &outbound.file_name).await;
            let _ = tx.send(AppEvent::QueryDone(result));
        });
    }

    // ── Scrolling ──

    fn scroll_down(&mut self, n: usize) {
        let base = if self.auto_scroll {
            self.last_max_scroll
        } else {
            self.scroll_offset
        };
        self.scroll_offset = base.saturating_add(n);
        self.auto_scroll = false;
    }

    fn scroll_up(&mut self, n: usize) {
        let base = if self.auto_scroll {
            self.last_max_scroll
        } else {
            self.scroll_offset
        };
        self.scroll_offset = base.saturating_sub(n);
        self.auto_scroll = false;
    }

    fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = false;
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panes = Layout::horizontal([
            Constraint::Percentage(62), // Conversation
            Constraint::Percentage(38), // Document preview
        ])
        .split(area);

        let chat_rows = Layout::vertical([
            Constraint::Min(1),    // Messages
            Constraint::Length(4), // Mode indicator + input
        ])
        .split(panes[0]);

        self.render_messages(frame, chat_rows[0]);
        self.render_input(frame, chat_rows[1]);
        self.render_preview(frame, panes[1]);
    }

    fn render_messages(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(
            " {} ({}) ",
            self.session.display_name(),
            self.session.persona().label()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::TEXT_MUTED))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width.saturating_sub(1) as usize;
        let assistant_label = self.session.display_name().to_string();
        let mut all_lines: Vec<Line> = self
            .session
            .transcript()
            .iter()
            .flat_map(|message| message_lines(message, &assistant_label, width))
            .collect();

        if self.session.is_sending() {
            all_lines.push(Line::styled(
                self.session.typing_text(),
                Style::default()
                    .fg(theme::TEXT_MUTED)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        let viewport = inner.height as usize;
        let total = all_lines.len();
        let max_scroll = total.saturating_sub(viewport);
        self.last_max_scroll = max_scroll;

        // Pinned to the newest line unless the user scrolled away.
        let top = if self.auto_scroll {
            max_scroll
        } else {
            self.scroll_offset.min(max_scroll)
        };

        let window: Vec<Line> = all_lines.into_iter().skip(top).take(viewport).collect();
        frame.render_widget(Paragraph::new(window), inner);

        if total > viewport {
            let mut bar = ScrollbarState::new(total)
                .position(top)
                .viewport_content_length(viewport);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut bar,
            );
        }

        // Scrolled away from the tail: pin a hint to the bottom corner.
        if !self.auto_scroll && top < max_scroll {
            let tag = " ↓ new messages below ";
            let tag_width = (tag.chars().count() as u16).min(inner.width);
            let corner = Rect::new(
                inner.right().saturating_sub(tag_width),
                inner.bottom().saturating_sub(1),
                tag_width,
                1,
            );
            let hint_style = Style::default()
                .fg(theme::BG_BASE)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD);
            frame.render_widget(Paragraph::new(Line::styled(tag, hint_style)), corner);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let mode_line = match self.input_mode {
            ChatInputMode::Insert => Line::from(Span::styled(
                " -- INSERT -- ",
                Style::default().fg(theme::BG_BASE).bg(theme::ACCENT),
            )),
            ChatInputMode::Normal => Line::from(Span::styled(
                " -- NORMAL -- ",
                Style::default().fg(theme::BG_BASE).bg(theme::TEXT_MUTED),
            )),
        };

        let rows = Layout::vertical([
            Constraint::Length(1), // Mode indicator
            Constraint::Min(1),    // Input box
        ])
        .split(area);

        frame.render_widget(Paragraph::new(mode_line), rows[0]);
        frame.render_widget(self.input_widget(), rows[1]);
    }

    fn input_widget(&self) -> Paragraph<'_> {
        let (border_color, title) = match self.input_mode {
            ChatInputMode::Insert => (theme::ACCENT, " Message (Esc to exit) "),
            ChatInputMode::Normal => (theme::TEXT_MUTED, " Message "),
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);

        if self.session.is_sending() {
            block = block.title_bottom(Line::styled(
                format!(" {} ", self.session.typing_text()),
                Style::default().fg(theme::PRIMARY_LIGHT),
            ));
        }

        let text = self.input.text();
        let content = if text.is_empty() && self.input_mode == ChatInputMode::Normal {
            Line::styled(
                "Ask something... (i to enter insert mode)",
                Style::default().fg(theme::TEXT_MUTED),
            )
        } else if self.input_mode == ChatInputMode::Insert {
            // Split around the cursor so it renders as a block.
            let cursor = self.input.cursor_position();
            let (before, after) = text.split_at(cursor);
            let cursor_char = after.chars().next().unwrap_or(' ');
            let rest = if after.is_empty() {
                ""
            } else {
                &after[cursor_char.len_utf8()..]
            };
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default().fg(theme::BG_BASE).bg(theme::TEXT),
                ),
                Span::raw(rest.to_string()),
            ])
        } else {
            Line::raw(text.to_string())
        };

        Paragraph::new(content).block(block)
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" 📄 {} ", self.session.display_name());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::DOC))
            .title(Span::styled(
                title,
                Style::default().fg(theme::DOC).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(doc) = &self.doc else {
            frame.render_widget(
                Paragraph::new(Line::styled(PREVIEW_PLACEHOLDER, theme::muted()))
                    .wrap(Wrap { trim: true }),
                inner,
            );
            return;
        };

        match &self.preview {
            Some(preview_lines) => {
                let lines: Vec<Line> = preview_lines
                    .iter()
                    .take(inner.height as usize)
                    .map(|l| Line::styled(l.clone(), Style::default().fg(theme::TEXT_MUTED)))
                    .collect();
                frame.render_widget(Paragraph::new(lines), inner);
            }
            None => {
                // Binary kinds get a metadata card instead of raw bytes.
                let size = doc
                    .size_bytes()
                    .map(super::upload::format_size)
                    .unwrap_or_else(|| "?".into());
                let card = vec![
                    Line::raw(""),
                    Line::from(Span::styled(
                        format!("  {}", doc.file_name),
                        Style::default()
                            .fg(theme::TEXT)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::styled(format!("  Type: {}", doc.kind.label()), theme::muted()),
                    Line::styled(format!("  Size: {size}"), theme::muted()),
                    Line::raw(""),
                    Line::styled("  Binary preview is not supported here.", theme::dim()),
                    Line::styled("  Ask about the content in the chat pane.", theme::dim()),
                ];
                frame.render_widget(Paragraph::new(card), inner);
            }
        }
    }
}

// ============================================================================
// Line building
// ============================================================================

/// Lines for one transcript turn: role header, wrapped body, spacer.
fn message_lines(
    message: &ChatMessage,
    assistant_label: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let (label, color) = match message.role {
        Role::User => ("You".to_string(), theme::SUCCESS),
        Role::Assistant => (assistant_label.to_string(), theme::PRIMARY_LIGHT),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("── {label} ──"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    for raw in message.text.lines() {
        for wrapped in wrap_line(raw, width) {
            lines.push(Line::raw(wrapped));
        }
    }
    lines.push(Line::raw(""));
    lines
}

/// Greedy word wrap; words longer than the width are hard-split.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }

    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if count > 0 && count + 1 + word_len > width {
            out.push(std::mem::take(&mut current));
            count = 0;
        }
        if word_len > width {
            for c in word.chars() {
                if count == width {
                    out.push(std::mem::take(&mut current));
                    count = 0;
                }
                current.push(c);
                count += 1;
            }
        } else {
            if count > 0 {
                current.push(' ');
                count += 1;
            }
            current.push_str(word);
            count += word_len;
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
