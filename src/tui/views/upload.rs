//! Upload view — pick a local document, validate it, send it to the
//! backend, then hand off to chat.
//!
//! The form walks through phases: type (or drag/paste) a path, press
//! Enter to stage it, then Enter again to upload. Validation happens at
//! staging time: extension and magic bytes must agree on PDF, DOCX, or
//! TXT, and nothing is sent to the backend for a rejected file. The
//! progress bar is synthetic — it starts once the backend accepts the
//! file, rises 10% at a time, holds briefly at 100%, then the app
//! switches to the chat view.
//!
//! Keybinds: `i/e` edit path, `Enter` stage/upload, `x` clear, `Esc` cancel edit.

use std::path::Path;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

use super::super::theme;
use crate::core::backend::{BackendError, UploadResponse};
use crate::core::document::UploadedDocumentRef;
use crate::core::progress::{ProgressSource, SyntheticProgress};
use crate::tui::events::{Action, AppEvent};
use crate::tui::services::Services;
use crate::tui::widgets::input_buffer::InputBuffer;

// ── Alert copy ──────────────────────────────────────────────────────────────

/// Shown when the upload action fires with no staged file.
const SELECT_FILE_ALERT: &str = "Please select a file first!";
/// Shown when the upload round-trip fails for any reason.
const UPLOAD_FAILED_ALERT: &str = "Something went wrong while uploading the file.";

/// Placeholder for the empty path prompt. Terminals paste a file's
/// path when one is dragged onto them, so the wording holds up.
const PROMPT_PLACEHOLDER: &str = "Click or drag a file here to upload";

// ── Phases ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// Form idle: nothing staged yet.
    Idle,
    /// The path prompt is being edited.
    EditingPath,
    /// A validated document is staged, ready to send.
    Staged,
    /// Waiting for the backend to accept the file.
    Uploading,
    /// Backend accepted; synthetic progress is rising.
    Animating,
}

// ── Upload events (from background tasks) ───────────────────────────────────

#[derive(Debug)]
pub enum UploadEvent {
    /// Backend accepted the file.
    Accepted(UploadResponse),
    /// Reading the file or the POST itself failed.
    Failed(String),
}

// ── State ───────────────────────────────────────────────────────────────────

pub struct UploadState {
    phase: UploadPhase,
    path_input: InputBuffer,
    doc: Option<UploadedDocumentRef>,
    alert: Option<String>,
    percent: u8,
    progress: Option<Box<dyn ProgressSource>>,
    suggested_questions: Vec<String>,
    data_rx: mpsc::UnboundedReceiver<UploadEvent>,
    data_tx: mpsc::UnboundedSender<UploadEvent>,
}

impl UploadState {
    pub fn new() -> Self {
        let (data_tx, data_rx) = mpsc::unbounded_channel();
        Self {
            phase: UploadPhase::Idle,
            path_input: InputBuffer::new(),
            doc: None,
            alert: None,
            percent: 0,
            progress: None,
            suggested_questions: Vec::new(),
            data_rx,
            data_tx,
        }
    }

    /// Returns a clone of the event sender for background tasks.
    pub fn event_tx(&self) -> mpsc::UnboundedSender<UploadEvent> {
        self.data_tx.clone()
    }

    /// Called when the view gains focus: stale alerts are dropped.
    pub fn load(&mut self, _services: &Services) {
        self.alert = None;
    }

    /// Whether the path prompt is capturing keystrokes.
    pub fn is_editing(&self) -> bool {
        self.phase == UploadPhase::EditingPath
    }

    /// Apply everything the worker task queued since the last frame.
    pub fn poll(&mut self) {
        while let Ok(event) = self.data_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Advance the synthetic progress bar; hands off to chat when done.
    pub fn on_tick(&mut self, now: Instant, services: &Services) {
        if self.phase != UploadPhase::Animating {
            return;
        }
        let Some(progress) = self.progress.as_mut() else {
            return;
        };

        let update = progress.poll(now);
        self.percent = update.percent;
        if update.done {
            if let Some(doc) = self.doc.clone() {
                log::info!("Upload of {} complete, opening chat", doc.file_name);
                let _ = services.event_tx.send(AppEvent::Action(Action::OpenChat(doc)));
            }
            self.reset();
        }
    }

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        if let Event::Paste(text) = event {
            if self.phase == UploadPhase::Idle || self.phase == UploadPhase::EditingPath {
                self.phase = UploadPhase::EditingPath;
                self.path_input.insert_str(text);
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

        match self.phase {
            UploadPhase::Idle => self.handle_idle_input(*modifiers, *code),
            UploadPhase::EditingPath => self.handle_edit_input(*modifiers, *code),
            UploadPhase::Staged => self.handle_staged_input(*modifiers, *code, services),
            // Input is parked while a round-trip or animation is running.
            UploadPhase::Uploading | UploadPhase::Animating => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_focused("Upload a Document");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Path prompt
            Constraint::Length(2), // Staged file card
            Constraint::Length(3), // Action row: button / status / gauge
            Constraint::Length(2), // Alert
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled("  PDF, DOCX, or TXT only.", theme::muted())),
            rows[0],
        );
        self.render_path_prompt(frame, rows[1]);
        self.render_staged_card(frame, rows[2]);
        self.render_action_row(frame, rows[3]);
        self.render_alert(frame, rows[4]);
        self.render_hints(frame, rows[6]);
    }

    // ── Input handlers ──────────────────────────────────────────────────────

    fn handle_idle_input(&mut self, modifiers: KeyModifiers, code: KeyCode) -> bool {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char('i') | KeyCode::Char('e')) => {
                self.phase = UploadPhase::EditingPath;
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.alert = Some(SELECT_FILE_ALERT.into());
                true
            }
            _ => false,
        }
    }

    fn handle_edit_input(&mut self, modifiers: KeyModifiers, code: KeyCode) -> bool {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.phase = UploadPhase::Idle;
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.stage_from_input();
                true
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.path_input.backspace();
                true
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.path_input.delete();
                true
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.path_input.move_left();
                true
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.path_input.move_right();
                true
            }
            (KeyModifiers::NONE, KeyCode::Home) => {
                self.path_input.move_home();
                true
            }
            (KeyModifiers::NONE, KeyCode::End) => {
                self.path_input.move_end();
                true
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.path_input.clear();
                true
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.path_input.insert_char(c);
                true
            }
            _ => false,
        }
    }

    fn handle_staged_input(
        &mut self,
        modifiers: KeyModifiers,
        code: KeyCode,
        services: &Services,
    ) -> bool {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.begin_upload(services);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Char('i')) => {
                self.phase = UploadPhase::EditingPath;
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('x')) => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    // ── Transitions ─────────────────────────────────────────────────────────

    /// Validate the typed path and stage the document.
    fn stage_from_input(&mut self) {
        let raw = self.path_input.text().trim().to_string();
        if raw.is_empty() {
            self.alert = Some(SELECT_FILE_ALERT.into());
            self.phase = UploadPhase::Idle;
            return;
        }

        match UploadedDocumentRef::stage(Path::new(&raw)) {
            Ok(doc) => {
                log::info!("Staged {} ({})", doc.file_name, doc.kind.label());
                self.doc = Some(doc);
                self.alert = None;
                self.phase = UploadPhase::Staged;
            }
            Err(err) => {
                log::debug!("Rejected {raw}: {err}");
                self.alert = Some(err.to_string());
            }
        }
    }

    /// Read the staged file and POST it in a background task.
    fn begin_upload(&mut self, services: &Services) {
        let Some(doc) = self.doc.clone() else {
            self.alert = Some(SELECT_FILE_ALERT.into());
            return;
        };

        self.phase = UploadPhase::Uploading;
        self.alert = None;
        log::info!("Uploading {}", doc.file_name);

        let backend = services.backend.clone();
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let bytes = match tokio::fs::read(&doc.path).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    let _ = tx.send(UploadEvent::Failed(format!(
                        "read {}: {err}",
                        doc.path.display()
                    )));
                    return;
                }
            };

            let event = match backend.upload(&doc.file_name, bytes, doc.kind.mime()).await {
                Ok(response) => UploadEvent::Accepted(response),
                Err(err) => UploadEvent::Failed(describe_backend_error(&err)),
            };
            let _ = tx.send(event);
        });
    }

    fn apply_event(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::Accepted(response) => {
                log::info!(
                    "Backend accepted upload: {}",
                    response.message.as_deref().unwrap_or("(no message)")
                );
                self.suggested_questions = response.suggested_questions.unwrap_or_default();
                self.percent = 0;
                self.progress = Some(Box::new(SyntheticProgress::start(Instant::now())));
                self.phase = UploadPhase::Animating;
            }
            UploadEvent::Failed(detail) => {
                log::warn!("Upload failed: {detail}");
                self.alert = Some(UPLOAD_FAILED_ALERT.into());
                self.phase = UploadPhase::Staged;
            }
        }
    }

    fn reset(&mut self) {
        self.phase = UploadPhase::Idle;
        self.path_input.clear();
        self.doc = None;
        self.alert = None;
        self.percent = 0;
        self.progress = None;
        self.suggested_questions.clear();
    }

    // ── Render sub-sections ─────────────────────────────────────────────────

    fn render_path_prompt(&self, frame: &mut Frame, area: Rect) {
        let editing = self.is_editing();
        let (border, title) = if editing {
            (theme::ACCENT, " File (Esc to cancel) ")
        } else {
            (theme::TEXT_DIM, " File ")
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title);

        let text = self.path_input.text();
        let content = if text.is_empty() && !editing {
            Line::styled(PROMPT_PLACEHOLDER, Style::default().fg(theme::TEXT_DIM))
        } else if editing {
            let cursor = self.path_input.cursor_position();
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
            Line::styled(text.to_string(), theme::muted())
        };

        frame.render_widget(Paragraph::new(content).block(block), area);
    }

    fn render_staged_card(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.doc {
            Some(doc) => {
                let size = doc
                    .size_bytes()
                    .map(format_size)
                    .unwrap_or_else(|| "?".into());
                Line::from(vec![
                    Span::styled(
                        format!("  {} ", doc.file_name),
                        Style::default()
                            .fg(theme::TEXT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("({}, {size})", doc.kind.label()),
                        theme::muted(),
                    ),
                ])
            }
            None => Line::styled("  No file selected.", theme::dim()),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_action_row(&self, frame: &mut Frame, area: Rect) {
        match self.phase {
            UploadPhase::Staged => {
                frame.render_widget(
                    Paragraph::new(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(" Upload & Continue ", theme::brand_badge()),
                    ])),
                    area,
                );
            }
            UploadPhase::Uploading => {
                frame.render_widget(
                    Paragraph::new(Line::styled(
                        "  Uploading...",
                        Style::default().fg(theme::PRIMARY_LIGHT),
                    )),
                    area,
                );
            }
            UploadPhase::Animating => {
                let filled = if self.percent >= 100 {
                    theme::SUCCESS
                } else {
                    theme::PRIMARY
                };
                let gauge = LineGauge::default()
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(theme::PRIMARY)),
                    )
                    .ratio(f64::from(self.percent) / 100.0)
                    .label(Line::styled(
                        format!("{}% uploaded", self.percent),
                        Style::default()
                            .fg(theme::TEXT)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .filled_style(Style::default().fg(filled))
                    .unfilled_style(Style::default().fg(theme::TEXT_DIM));
                frame.render_widget(gauge, area);
            }
            UploadPhase::Idle | UploadPhase::EditingPath => {}
        }
    }

    fn render_alert(&self, frame: &mut Frame, area: Rect) {
        if let Some(alert) = &self.alert {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    format!("  ⚠ {alert}"),
                    Style::default().fg(theme::WARNING),
                )),
                area,
            );
        } else if self.phase == UploadPhase::Animating {
            if let Some(question) = self.suggested_questions.first() {
                frame.render_widget(
                    Paragraph::new(Line::styled(
                        format!("  Try asking: {question}"),
                        Style::default().fg(theme::INFO),
                    )),
                    area,
                );
            }
        }
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.phase {
            UploadPhase::Idle => "  [i] type path  [Enter] upload  [Tab] switch view",
            UploadPhase::EditingPath => "  [Enter] stage file  [Esc] cancel",
            UploadPhase::Staged => "  [Enter] upload  [e] edit path  [x] clear",
            UploadPhase::Uploading | UploadPhase::Animating => "",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hints, theme::key_hint()))),
            area,
        );
    }
}

/// Reduce a transport error to a single log-friendly line.
fn describe_backend_error(err: &BackendError) -> String {
    match err {
        BackendError::UploadStatus(status) => format!("backend returned {status}"),
        other => other.to_string(),
    }
}

/// Human-readable byte count: `812 B`, `4.2 KB`, `1.3 MB`.
pub(crate) fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
