//! Branded splash screen shown while the app warms up.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme;

/// Splash screen state: visible until its deadline passes or a key
/// dismisses it.
pub struct SplashState {
    deadline: Option<Instant>,
}

impl SplashState {
    /// A `duration_ms` of zero disables the splash entirely.
    pub fn new(duration_ms: u64) -> Self {
        let deadline = if duration_ms == 0 {
            None
        } else {
            Some(Instant::now() + Duration::from_millis(duration_ms))
        };
        Self { deadline }
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Expire the splash once its deadline has passed. Returns true if
    /// it was dismissed on this call.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Any key dismisses the splash early.
    pub fn dismiss(&mut self) {
        self.deadline = None;
    }

    /// Render the ripple logo over the full frame.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let ripple = theme::muted();
        let mut lines: Vec<Line> = Vec::new();

        let art_height = 8u16;
        for _ in 0..area.height.saturating_sub(art_height) / 2 {
            lines.push(Line::raw(""));
        }

        lines.push(Line::styled("·   ·   ·", ripple));
        lines.push(Line::styled("·               ·", ripple));
        lines.push(Line::from(vec![
            Span::styled("·    ", ripple),
            Span::styled(" RoleDoc ", theme::brand_badge()),
            Span::styled("    ·", ripple),
        ]));
        lines.push(Line::styled("·               ·", ripple));
        lines.push(Line::styled("·   ·   ·", ripple));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Your smart document assistant",
            theme::muted(),
        ));
        lines.push(Line::styled("loading...", theme::dim()));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_disables() {
        let splash = SplashState::new(0);
        assert!(!splash.is_active());
    }

    #[test]
    fn test_expires_after_deadline() {
        let mut splash = SplashState::new(1500);
        let start = Instant::now();
        assert!(splash.is_active());
        assert!(!splash.on_tick(start));
        assert!(splash.is_active());

        assert!(splash.on_tick(start + Duration::from_millis(1600)));
        assert!(!splash.is_active());

        // Already dismissed: later ticks are no-ops.
        assert!(!splash.on_tick(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_key_dismisses_early() {
        let mut splash = SplashState::new(1500);
        splash.dismiss();
        assert!(!splash.is_active());
    }
}
