use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, AreaFocus, Focus, Notification, NotificationLevel};
use super::layout::AppLayout;
use super::navbar::NavbarState;
use super::services::Services;
use super::splash::SplashState;
use super::theme;
use super::views::about::AboutState;
use super::views::chat::{ChatInputMode, ChatState};
use super::views::docs::DocsState;
use super::views::upload::UploadState;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Currently focused top-level view.
    pub focus: Focus,
    /// Whether the navbar or the main content has input focus.
    pub area_focus: AreaFocus,
    /// Top navigation bar state.
    pub navbar: NavbarState,
    /// Startup splash screen state.
    pub splash: SplashState,
    /// Upload view state.
    pub upload: UploadState,
    /// Chat view state.
    pub chat: ChatState,
    /// Documentation view state.
    pub docs: DocsState,
    /// About view state.
    pub about: AboutState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiving half of the event bus.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sending half; background tasks get their clones via `Services`.
    #[allow(dead_code)]
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Shared backend client and config handles.
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        services: Services,
    ) -> Self {
        let splash = SplashState::new(services.config.tui.splash_ms);
        Self {
            running: true,
            focus: Focus::Upload,
            area_focus: AreaFocus::Main,
            navbar: NavbarState::new(),
            splash,
            upload: UploadState::new(),
            chat: ChatState::new(),
            docs: DocsState::new(),
            about: AboutState::new(),
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
            event_tx,
            services,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Event loop. Draws, then applies whichever event source fires first.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        // Load the landing view
        if self.focus == Focus::Upload {
            self.upload.load(&self.services);
        }

        while self.running {
            // Draw, then wait for whichever source fires first.
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                Some(event) = self.event_rx.recv() => self.handle_event(event),
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(term_event));
                }
                _ = tick_interval.tick() => self.on_tick(),
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Splash swallows everything; a key dismisses it
                if self.splash.is_active() {
                    if matches!(
                        crossterm_event,
                        Event::Key(KeyEvent {
                            kind: KeyEventKind::Press,
                            ..
                        })
                    ) {
                        self.splash.dismiss();
                    }
                    return;
                }

                // Priority 2: Help modal swallows input; Esc or ? closes it
                if self.show_help {
                    if let Event::Key(KeyEvent {
                        code: KeyCode::Esc | KeyCode::Char('?'),
                        kind: KeyEventKind::Press,
                        ..
                    }) = crossterm_event
                    {
                        self.show_help = false;
                    }
                    return;
                }

                // Priority 3: Navbar input (when focused)
                if self.area_focus == AreaFocus::Navbar
                    && self.handle_navbar_input(&crossterm_event)
                {
                    return;
                }

                // Priority 4: Focused view
                let consumed = self.dispatch_view_input(&crossterm_event);
                if consumed {
                    return;
                }

                // Priority 5: Global keybindings
                if let Some(action) = self.map_input_to_action(crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::QueryDone(outcome) => {
                self.chat.on_query_done(outcome);
            }
            AppEvent::Notification(notification) => {
                self.push_notification_raw(notification);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    /// Offer input to the focused view; true means it was consumed.
    fn dispatch_view_input(&mut self, event: &Event) -> bool {
        match self.focus {
            Focus::Upload => self.upload.handle_input(event, &self.services),
            Focus::Chat => self.chat.handle_input(event, &self.services),
            Focus::Docs => self.docs.handle_input(event, &self.services),
            Focus::About => self.about.handle_input(event, &self.services),
        }
    }

    /// Handle navbar-specific input. Returns true if consumed.
    fn handle_navbar_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('l'))
            | (KeyModifiers::NONE, KeyCode::Right)
            | (KeyModifiers::NONE, KeyCode::Char('j'))
            | (KeyModifiers::NONE, KeyCode::Down) => {
                self.navbar.select_next(self.focus);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('h'))
            | (KeyModifiers::NONE, KeyCode::Left)
            | (KeyModifiers::NONE, KeyCode::Char('k'))
            | (KeyModifiers::NONE, KeyCode::Up) => {
                self.navbar.select_prev(self.focus);
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                let target = self.navbar.selected_target(self.focus);
                self.navbar.menu_open = false;
                self.handle_action(target.to_action());
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('m')) => {
                self.navbar.toggle_menu();
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.navbar.menu_open = false;
                self.area_focus = AreaFocus::Main;
                true
            }
            _ => false,
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        // Global keybindings (active when no modal or view consumes)
        match (modifiers, code) {
            // Ctrl+B → focus the navigation bar
            (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(Action::FocusNavbar),
            // Ctrl+C → quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            // No modifiers
            (KeyModifiers::NONE | KeyModifiers::SHIFT, _) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ToggleHelp),
                KeyCode::Tab => Some(Action::TabNext),
                KeyCode::BackTab => Some(Action::TabPrev),
                // Number keys → jump to view
                KeyCode::Char('1') => Some(Action::FocusUpload),
                KeyCode::Char('2') => Some(Action::FocusChat),
                KeyCode::Char('3') => Some(Action::FocusDocs),
                KeyCode::Char('4') => Some(Action::FocusAbout),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusUpload => {
                self.set_focus(Focus::Upload);
                self.upload.load(&self.services);
            }
            Action::FocusChat => {
                self.set_focus(Focus::Chat);
                self.chat.load(&self.services);
            }
            Action::FocusDocs => {
                self.set_focus(Focus::Docs);
                self.docs.load(&self.services);
            }
            Action::FocusAbout => {
                self.set_focus(Focus::About);
                self.about.load(&self.services);
            }
            Action::TabNext => {
                self.focus = self.focus.next();
                self.navbar.sync_to_focus(self.focus);
                self.on_focus_changed();
            }
            Action::TabPrev => {
                self.focus = self.focus.prev();
                self.navbar.sync_to_focus(self.focus);
                self.on_focus_changed();
            }
            Action::FocusNavbar => {
                if self.area_focus == AreaFocus::Navbar {
                    self.area_focus = AreaFocus::Main;
                } else {
                    self.area_focus = AreaFocus::Navbar;
                    self.navbar.sync_to_focus(self.focus);
                }
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::OpenChat(doc) => {
                let name = doc.file_name.clone();
                self.chat.open_document(doc);
                self.set_focus(Focus::Chat);
                self.push_notification(
                    format!("{name} uploaded"),
                    NotificationLevel::Success,
                );
            }
        }
    }

    /// Set focus and sync navbar selection.
    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.navbar.sync_to_focus(focus);
        self.area_focus = AreaFocus::Main;
    }

    fn on_focus_changed(&mut self) {
        match self.focus {
            Focus::Upload => self.upload.load(&self.services),
            Focus::Chat => self.chat.load(&self.services),
            Focus::Docs => self.docs.load(&self.services),
            Focus::About => self.about.load(&self.services),
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification with the standard lifetime (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        self.push_notification_raw(Notification {
            id: 0,
            message,
            level,
            ttl_ticks: 100,
        });
    }

    /// Queue a fully-formed notification, keeping its TTL. The id is
    /// re-stamped from the app counter.
    fn push_notification_raw(&mut self, mut notification: Notification) {
        if self
            .notifications
            .iter()
            .any(|n| n.message == notification.message)
        {
            return;
        }

        self.notification_counter += 1;
        notification.id = self.notification_counter;
        self.notifications.push(notification);

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, advance animations, poll async data.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);

        let now = Instant::now();
        let _ = self.splash.on_tick(now);

        self.upload.poll();
        self.upload.on_tick(now, &self.services);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.splash.is_active() {
            self.splash.render(frame, area);
            return;
        }

        // The chat view runs full-screen; every other view sits under the navbar.
        let show_navbar = self.focus != Focus::Chat;
        let (layout, visibility) =
            AppLayout::compute(area, show_navbar, self.navbar.menu_open);

        if let Some(navbar_area) = layout.navbar {
            self.navbar
                .render(frame, navbar_area, visibility, self.focus, self.area_focus);
        }

        self.render_content(frame, layout.main);

        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.focus {
            Focus::Upload => self.upload.render(frame, area),
            Focus::Chat => self.chat.render(frame, area),
            Focus::Docs => self.docs.render(frame, area),
            Focus::About => self.about.render(frame, area),
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let backend_status = if self.chat.session().is_sending() {
            Span::styled("thinking", Style::default().fg(theme::PRIMARY_LIGHT))
        } else {
            Span::styled("ready", Style::default().fg(theme::TEXT_MUTED))
        };

        let in_insert =
            self.focus == Focus::Chat && self.chat.input_mode() == ChatInputMode::Insert;
        let mode_indicator = if in_insert {
            Span::styled(" INSERT ", theme::insert_badge())
        } else {
            Span::raw("")
        };

        let view_name = Span::styled(
            self.focus.label(),
            Style::default()
                .fg(theme::PRIMARY_LIGHT)
                .add_modifier(Modifier::BOLD),
        );

        let status = Line::from(vec![
            Span::styled(" RoleDoc ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            view_name,
            Span::raw(" │ "),
            Span::styled("Backend:", theme::key_hint()),
            Span::raw(" "),
            backend_status,
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":nav "),
            Span::styled("Ctrl+B", theme::key_hint()),
            Span::raw(":menu "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    /// Toast chips in the top-right corner, oldest on top.
    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        let width_budget = area.width.saturating_sub(4);

        for (row, n) in self.notifications.iter().enumerate() {
            let (glyph, color) = match n.level {
                NotificationLevel::Info => ("ℹ", theme::INFO),
                NotificationLevel::Success => ("✓", theme::SUCCESS),
                NotificationLevel::Warning => ("⚠", theme::WARNING),
                NotificationLevel::Error => ("✗", theme::ERROR),
            };

            let text = format!(" {glyph} {} ", n.message);
            let chip_width = (text.chars().count() as u16).min(width_budget);
            let chip = Rect::new(
                area.width.saturating_sub(chip_width + 2),
                1 + row as u16,
                chip_width,
                1,
            );

            frame.render_widget(Clear, chip);
            frame.render_widget(
                Paragraph::new(Line::styled(
                    text,
                    Style::new().fg(theme::BG_BASE).bg(color).bold(),
                )),
                chip,
            );
        }
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let sections: [(&str, &[(&str, &str)]); 5] = [
            (
                "Global",
                &[
                    ("q", "Quit application"),
                    ("?", "Toggle this help"),
                    ("Tab / Shift+Tab", "Next / previous view"),
                    ("1-4", "Jump to view by number"),
                    ("Ctrl+B", "Focus the navigation bar"),
                    ("Ctrl+C", "Force quit"),
                ],
            ),
            (
                "Navigation bar (when focused)",
                &[
                    ("h/l", "Move between links"),
                    ("Enter", "Open the selected page"),
                    ("m", "Toggle the hamburger menu"),
                    ("Esc", "Back to the page"),
                ],
            ),
            (
                "Upload",
                &[
                    ("i / e", "Type a file path"),
                    ("Enter", "Stage / upload the file"),
                    ("x", "Clear the staged file"),
                    ("Esc", "Cancel editing"),
                ],
            ),
            (
                "Chat",
                &[
                    ("i / Enter / a", "Enter insert mode"),
                    ("Esc", "Exit insert mode"),
                    ("j/k", "Scroll messages"),
                    ("G / g", "Jump to bottom / top"),
                    ("p / P", "Cycle reply persona"),
                ],
            ),
            (
                "Docs & About",
                &[("j/k", "Scroll"), ("g / G", "Jump to top / bottom")],
            ),
        ];

        let key_style = Style::new().fg(theme::PRIMARY_LIGHT).bold();

        let mut lines = vec![Line::raw("")];
        for (heading, rows) in sections {
            lines.push(Line::styled(format!("  {heading}"), theme::heading()));
            for (key, what) in rows {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{key:<18}"), key_style),
                    Span::raw(*what),
                ]));
            }
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", key_style),
            Span::raw(" or "),
            Span::styled("Esc", key_style),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Keybindings ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::new().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Rect centered in `area`, sized as a percentage of it on each axis.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let band = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area)[1];

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(band)[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::document::UploadedDocumentRef;

    fn test_app() -> AppState {
        let (tx, rx) = mpsc::unbounded_channel();
        let services = Services::init(AppConfig::default(), tx.clone());
        AppState::new(rx, tx, services)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    #[test]
    fn test_focus_next_cycles_4() {
        let mut f = Focus::Upload;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, Focus::Upload); // Full cycle
    }

    #[test]
    fn test_focus_prev_cycles_4() {
        let mut f = Focus::Upload;
        for _ in 0..4 {
            f = f.prev();
        }
        assert_eq!(f, Focus::Upload); // Full cycle
    }

    #[test]
    fn test_focus_first_steps() {
        assert_eq!(Focus::Upload.next(), Focus::Chat);
        assert_eq!(Focus::About.next(), Focus::Upload);
        assert_eq!(Focus::Upload.prev(), Focus::About);
    }

    #[test]
    fn test_focus_labels_nonempty() {
        for f in Focus::ALL {
            assert!(!f.label().is_empty());
        }
    }

    #[test]
    fn test_focus_to_action_is_unique() {
        let actions: Vec<Action> = Focus::ALL.iter().map(|f| f.to_action()).collect();
        for (i, a) in actions.iter().enumerate() {
            for (j, b) in actions.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_splash_swallows_first_key() {
        let mut app = test_app();
        assert!(app.splash.is_active());

        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.running, "first key only dismisses the splash");
        assert!(!app.splash.is_active());

        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.splash.dismiss();

        app.handle_event(ctrl('c'));
        assert!(!app.running);

        let mut app = test_app();
        app.splash.dismiss();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_help_modal_toggle() {
        let mut app = test_app();
        app.splash.dismiss();

        app.handle_event(key(KeyCode::Char('?')));
        assert!(app.show_help);

        // Modal captures everything except its close keys
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.running);
        assert!(app.show_help);

        app.handle_event(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = test_app();
        app.splash.dismiss();

        assert_eq!(app.focus, Focus::Upload);
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Chat);
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Docs);
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Chat);
    }

    #[test]
    fn test_number_keys_jump_to_views() {
        let mut app = test_app();
        app.splash.dismiss();

        app.handle_event(key(KeyCode::Char('3')));
        assert_eq!(app.focus, Focus::Docs);
        app.handle_event(key(KeyCode::Char('4')));
        assert_eq!(app.focus, Focus::About);
        app.handle_event(key(KeyCode::Char('1')));
        assert_eq!(app.focus, Focus::Upload);
    }

    #[test]
    fn test_navbar_focus_flow() {
        let mut app = test_app();
        app.splash.dismiss();

        app.handle_event(ctrl('b'));
        assert_eq!(app.area_focus, AreaFocus::Navbar);

        // On the upload view the first visible link is Docs
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Docs);
        assert_eq!(app.area_focus, AreaFocus::Main);
    }

    #[test]
    fn test_navbar_esc_returns_to_main() {
        let mut app = test_app();
        app.splash.dismiss();

        app.handle_event(ctrl('b'));
        app.handle_event(key(KeyCode::Char('m')));
        assert!(app.navbar.menu_open);

        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.area_focus, AreaFocus::Main);
        assert!(!app.navbar.menu_open);
    }

    #[test]
    fn test_open_chat_action_seeds_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();
        let doc = UploadedDocumentRef::stage(&path).unwrap();

        let mut app = test_app();
        app.splash.dismiss();

        app.handle_event(AppEvent::Action(Action::OpenChat(doc)));

        assert_eq!(app.focus, Focus::Chat);
        assert_eq!(app.chat.session().display_name(), "notes");
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications[0].message, "notes.txt uploaded");
    }

    #[test]
    fn test_push_notification_dedups() {
        let mut app = test_app();
        app.push_notification("same".into(), NotificationLevel::Info);
        app.push_notification("same".into(), NotificationLevel::Info);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_notifications_capped_at_three() {
        let mut app = test_app();
        for i in 0..5 {
            app.push_notification(format!("n{i}"), NotificationLevel::Info);
        }
        assert_eq!(app.notifications.len(), 3);
        assert_eq!(app.notifications[0].message, "n2");
    }

    #[test]
    fn test_notifications_expire_on_tick() {
        let mut app = test_app();
        app.push_notification("bye".into(), NotificationLevel::Info);
        app.notifications[0].ttl_ticks = 1;

        app.on_tick();
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_centered_rect_leaves_equal_margins() {
        let area = Rect::new(0, 0, 120, 40);
        let modal = centered_rect(60, 80, area);

        assert!(modal.width >= 70 && modal.width <= 74);
        assert!(modal.height >= 30 && modal.height <= 34);
        let left = modal.x;
        let right = area.width - modal.x - modal.width;
        assert!(left.abs_diff(right) <= 1);
        let top = modal.y;
        let bottom = area.height - modal.y - modal.height;
        assert!(top.abs_diff(bottom) <= 1);
    }

    #[test]
    fn test_area_focus_default_is_main() {
        assert_eq!(AreaFocus::default(), AreaFocus::Main);
    }
}
