//! Top navigation bar with a responsive hamburger menu.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::events::{AreaFocus, Focus};
use super::layout::NavbarVisibility;
use super::theme;

/// A navigation link: display name plus the view it routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub target: Focus,
}

/// All links in declaration order. "Home" routes to the upload view.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "Home",
        target: Focus::Upload,
    },
    NavLink {
        name: "Upload",
        target: Focus::Upload,
    },
    NavLink {
        name: "Docs",
        target: Focus::Docs,
    },
    NavLink {
        name: "About",
        target: Focus::About,
    },
];

/// Navbar navigation state.
pub struct NavbarState {
    /// Whether the hamburger dropdown is unfolded.
    pub menu_open: bool,
    /// Currently highlighted index (into the visible links).
    pub selected: usize,
}

impl NavbarState {
    pub fn new() -> Self {
        Self {
            menu_open: false,
            selected: 0,
        }
    }

    /// Toggle the hamburger dropdown.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Links shown for the given view. The upload view hides the links
    /// that route back to itself.
    pub fn visible_links(current: Focus) -> Vec<NavLink> {
        NAV_LINKS
            .iter()
            .copied()
            .filter(|link| !(current == Focus::Upload && link.target == Focus::Upload))
            .collect()
    }

    /// Move selection right/down.
    pub fn select_next(&mut self, current: Focus) {
        let len = Self::visible_links(current).len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection left/up.
    pub fn select_prev(&mut self, current: Focus) {
        let len = Self::visible_links(current).len();
        if len == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = len - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// The view the highlighted link routes to.
    pub fn selected_target(&self, current: Focus) -> Focus {
        let links = Self::visible_links(current);
        links
            .get(self.selected)
            .or_else(|| links.first())
            .map(|link| link.target)
            .unwrap_or(current)
    }

    /// Re-point the highlight at the link for the active focus
    /// (e.g., after Tab navigation).
    pub fn sync_to_focus(&mut self, focus: Focus) {
        let links = Self::visible_links(focus);
        self.selected = links
            .iter()
            .position(|link| link.target == focus)
            .unwrap_or(0);
    }

    /// Render the navbar.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        visibility: NavbarVisibility,
        current_focus: Focus,
        area_focus: AreaFocus,
    ) {
        match visibility {
            NavbarVisibility::Hidden => {}
            NavbarVisibility::Bar => {
                self.render_bar(frame, area, current_focus, area_focus);
            }
            NavbarVisibility::Hamburger => {
                self.render_hamburger(frame, area, current_focus, area_focus);
            }
        }
    }

    fn frame_block(area_focus: AreaFocus) -> Block<'static> {
        let border = if area_focus == AreaFocus::Navbar {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .style(Style::default().bg(theme::BG_SURFACE))
    }

    fn render_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        current_focus: Focus,
        area_focus: AreaFocus,
    ) {
        let navbar_focused = area_focus == AreaFocus::Navbar;
        let block = Self::frame_block(area_focus);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans: Vec<Span> = vec![
            Span::styled(" RoleDoc ", theme::brand_badge()),
            Span::raw("  "),
        ];

        for (idx, link) in Self::visible_links(current_focus).iter().enumerate() {
            let is_current = link.target == current_focus;
            let is_selected = navbar_focused && idx == self.selected;

            let style = if is_selected && is_current {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if is_selected {
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if is_current {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_MUTED)
            };

            spans.push(Span::styled(format!(" {} ", link.name), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn render_hamburger(
        &self,
        frame: &mut Frame,
        area: Rect,
        current_focus: Focus,
        area_focus: AreaFocus,
    ) {
        let navbar_focused = area_focus == AreaFocus::Navbar;
        let block = Self::frame_block(area_focus);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let burger_style = if navbar_focused {
            theme::highlight()
        } else {
            theme::muted()
        };
        let mut lines: Vec<Line> = vec![Line::from(vec![
            Span::styled(" RoleDoc ", theme::brand_badge()),
            Span::raw("  "),
            Span::styled("☰", burger_style),
        ])];

        if self.menu_open {
            for (idx, link) in Self::visible_links(current_focus).iter().enumerate() {
                if lines.len() >= inner.height as usize {
                    break;
                }

                let is_current = link.target == current_focus;
                let is_selected = navbar_focused && idx == self.selected;

                // Current view gets the accent, the cursor gets the arrow.
                let prefix = if is_selected { "▸ " } else { "  " };
                let mut style = match (is_selected, is_current) {
                    (_, true) => Style::default().fg(theme::ACCENT),
                    (true, false) => Style::default().fg(theme::TEXT),
                    (false, false) => Style::default().fg(theme::TEXT_MUTED),
                };
                if is_selected || is_current {
                    style = style.add_modifier(Modifier::BOLD);
                }

                lines.push(Line::from(Span::styled(
                    format!(" {prefix}{}", link.name),
                    style,
                )));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
