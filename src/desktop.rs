//! The desk itself: owns the registry, the floating windows, the panel
//! views and all input routing. This is the only module that mutates
//! desk-level state in response to events.

use std::collections::BTreeMap;

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::content;
use crate::dock;
use crate::event_loop::ControlFlow;
use crate::help;
use crate::hint::Hint;
use crate::panels::{
    AboutPanel, CaseStudyPanel, ChatbotPanel, ExperiencePanel, PanelContext, PanelRequest,
    PanelView, PlaylistPanel, ProjectsPanel,
};
use crate::registry::{PanelId, Registry};
use crate::sidebar;
use crate::theme::{Theme, ThemeStore};
use crate::ui::UiFrame;
use crate::viewport::{self, ViewportController, ViewportMode};
use crate::window::chrome::{self, ChromeHit};
use crate::window::{FloatRect, FloatWindow};

/// Default frame for each window when it is first opened.
fn spawn_frame(id: PanelId) -> FloatRect {
    let (x, y, width, height) = match id {
        PanelId::About => (6, 2, 46, 16),
        PanelId::Playlist => (56, 3, 36, 12),
        PanelId::Experience => (12, 5, 52, 18),
        PanelId::Projects => (24, 4, 44, 16),
        PanelId::CaseStudy => (18, 3, 56, 20),
        PanelId::Chatbot => (60, 8, 40, 18),
    };
    FloatRect {
        x,
        y,
        width,
        height,
    }
}

pub struct Desktop {
    registry: Registry,
    viewport: ViewportController,
    windows: BTreeMap<PanelId, FloatWindow>,
    about: AboutPanel,
    playlist: PlaylistPanel,
    experience: ExperiencePanel,
    projects: ProjectsPanel,
    case_study: CaseStudyPanel,
    chatbot: ChatbotPanel,
    theme: Theme,
    theme_store: Option<ThemeStore>,
    help_visible: bool,
    hint: Hint,
    area: Rect,
    drag_target: Option<PanelId>,
}

impl Desktop {
    pub fn new(
        theme: Theme,
        theme_store: Option<ThemeStore>,
        forced_mode: Option<ViewportMode>,
    ) -> Self {
        Self {
            registry: Registry::new(ViewportMode::Desktop),
            viewport: ViewportController::new(forced_mode),
            windows: BTreeMap::new(),
            about: AboutPanel::default(),
            playlist: PlaylistPanel::default(),
            experience: ExperiencePanel::default(),
            projects: ProjectsPanel::default(),
            case_study: CaseStudyPanel::default(),
            chatbot: ChatbotPanel::default(),
            theme,
            theme_store,
            help_visible: false,
            hint: Hint::new(),
            area: Rect::default(),
            drag_target: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn window(&self, id: PanelId) -> Option<&FloatWindow> {
        self.windows.get(&id)
    }

    /// Re-measure the viewport. `width_px` comes from the terminal when it
    /// reports a pixel size; otherwise the column count is used to estimate
    /// one. First entry into a mode opens that mode's default windows.
    pub fn resize(&mut self, columns: u16, rows: u16, width_px: Option<u16>) {
        self.area = Rect {
            x: 0,
            y: 0,
            width: columns,
            height: rows,
        };
        let px = width_px.unwrap_or_else(|| viewport::estimate_width_px(columns));
        let sample = self.viewport.sample(px);
        self.registry.set_mode(sample.mode);
        self.prune_windows();
        if sample.first_entry {
            match sample.mode {
                ViewportMode::Desktop => {
                    self.open_panel(PanelId::About);
                    self.open_panel(PanelId::Playlist);
                }
                ViewportMode::Mobile => {
                    self.open_panel(PanelId::About);
                }
            }
        }
    }

    fn open_panel(&mut self, id: PanelId) {
        self.registry.open(id);
        self.prune_windows();
        self.windows.entry(id).or_insert_with(|| {
            let frame = spawn_frame(id);
            FloatWindow::new(frame.x, frame.y, frame.width, frame.height)
        });
        if id == PanelId::CaseStudy
            && let Some(index) = self.registry.case_study()
        {
            self.case_study.show_project(index);
        }
    }

    fn close_panel(&mut self, id: PanelId) {
        let mode = self.registry.mode();
        self.registry.close(id);
        self.windows.remove(&id);
        if self.drag_target == Some(id) {
            self.drag_target = None;
        }
        // Closing the case study on mobile would leave an empty screen, so
        // hop back to the gallery it was opened from.
        if mode == ViewportMode::Mobile && id == PanelId::CaseStudy {
            self.open_panel(PanelId::Projects);
        }
    }

    /// Drop window state for panels the registry no longer lists as open
    /// (e.g. those collapsed away by a mobile transition).
    fn prune_windows(&mut self) {
        let registry = &self.registry;
        self.windows.retain(|id, _| registry.is_open(*id));
        if let Some(target) = self.drag_target
            && !self.windows.contains_key(&target)
        {
            self.drag_target = None;
        }
    }

    /// Open panels in paint order: insertion order with the focused panel
    /// moved last so it is drawn on top and hit-tested first.
    fn z_order(&self) -> Vec<PanelId> {
        let mut order: Vec<PanelId> = self.registry.open_panels().to_vec();
        if let Some(focused) = self.registry.focused()
            && let Some(pos) = order.iter().position(|&id| id == focused)
        {
            let id = order.remove(pos);
            order.push(id);
        }
        order
    }

    /// Screen-space frame of a window. Mobile windows ignore their stored
    /// geometry and fill the screen above the dock.
    fn window_frame(&self, id: PanelId) -> Option<FloatRect> {
        let window = self.windows.get(&id)?;
        match self.registry.mode() {
            ViewportMode::Desktop => Some(window.frame()),
            ViewportMode::Mobile => {
                let height = if window.minimized() {
                    chrome::CHROME_ROWS
                } else {
                    self.area.height.saturating_sub(1)
                };
                Some(FloatRect {
                    x: self.area.x as i32,
                    y: self.area.y as i32,
                    width: self.area.width,
                    height,
                })
            }
        }
    }

    fn view_mut(&mut self, id: PanelId) -> &mut dyn PanelView {
        match id {
            PanelId::About => &mut self.about,
            PanelId::Playlist => &mut self.playlist,
            PanelId::Experience => &mut self.experience,
            PanelId::Projects => &mut self.projects,
            PanelId::CaseStudy => &mut self.case_study,
            PanelId::Chatbot => &mut self.chatbot,
        }
    }

    fn apply_request(&mut self, request: PanelRequest) {
        match request {
            PanelRequest::OpenCaseStudy(index) => {
                if index < content::PROJECTS.len() {
                    self.registry.open_case_study(index);
                    self.open_panel(PanelId::CaseStudy);
                    self.case_study.show_project(index);
                }
            }
            PanelRequest::ShowProject(index) => {
                if index < content::PROJECTS.len() {
                    self.registry.set_case_study(index);
                    self.case_study.show_project(index);
                }
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(store) = &self.theme_store
            && let Err(err) = store.save(self.theme)
        {
            tracing::warn!(%err, "failed to persist theme");
        }
    }

    fn cycle_focus(&mut self) {
        let open = self.registry.open_panels();
        if open.is_empty() {
            return;
        }
        let next = match self.registry.focused() {
            Some(current) => {
                let pos = open.iter().position(|&id| id == current).unwrap_or(0);
                open[(pos + 1) % open.len()]
            }
            None => open[0],
        };
        self.registry.focus(next);
    }

    /// Forward an event to a panel with mouse coordinates rebased to the
    /// window's local space, so panels never see screen geometry.
    fn forward_to_panel(&mut self, id: PanelId, event: &Event) {
        let Some(frame) = self.window_frame(id) else {
            return;
        };
        let local_area = Rect {
            x: 1,
            y: 2,
            width: frame.width.saturating_sub(2),
            height: frame.height.saturating_sub(chrome::CHROME_ROWS),
        };
        if local_area.width == 0 || local_area.height == 0 {
            return;
        }
        let localized;
        let event = match event {
            Event::Mouse(mouse) => {
                let col = (mouse.column as i32 - frame.x).clamp(0, u16::MAX as i32) as u16;
                let row = (mouse.row as i32 - frame.y).clamp(0, u16::MAX as i32) as u16;
                localized = Event::Mouse(MouseEvent {
                    column: col,
                    row,
                    ..*mouse
                });
                &localized
            }
            other => other,
        };
        let palette = self.theme.palette();
        let ctx = PanelContext {
            palette: &palette,
            focused: self.registry.focused() == Some(id),
            mode: self.registry.mode(),
        };
        let request = self.view_mut(id).handle_event(event, local_area, &ctx);
        if let Some(request) = request {
            self.apply_request(request);
        }
    }

    /// Topmost open window whose frame contains the pointer.
    fn window_at(&self, column: u16, row: u16) -> Option<(PanelId, FloatRect)> {
        for id in self.z_order().into_iter().rev() {
            if let Some(frame) = self.window_frame(id)
                && frame.contains(column, row)
            {
                return Some((id, frame));
            }
        }
        None
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        if !matches!(event, Event::Resize(..)) {
            self.hint.dismiss();
        }
        if self.help_visible {
            // the overlay swallows everything except resize
            match event {
                Event::Resize(columns, rows) => self.resize(*columns, *rows, None),
                Event::Key(key) if key.kind == KeyEventKind::Press => self.help_visible = false,
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    self.help_visible = false;
                }
                _ => {}
            }
            return ControlFlow::Continue;
        }
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(event),
            Event::Mouse(mouse) => {
                self.handle_mouse(*mouse);
                ControlFlow::Continue
            }
            Event::Resize(columns, rows) => {
                self.resize(*columns, *rows, None);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_key(&mut self, event: &Event) -> ControlFlow {
        let Event::Key(key) = event else {
            return ControlFlow::Continue;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            return ControlFlow::Quit;
        }
        // While the chat window is focused every plain key is input, so
        // the single-letter shortcuts only apply elsewhere.
        let chat_focused = self.registry.focused() == Some(PanelId::Chatbot);
        if !chat_focused {
            match key.code {
                KeyCode::Char('q') => return ControlFlow::Quit,
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    return ControlFlow::Continue;
                }
                KeyCode::Char('?') => {
                    self.help_visible = true;
                    return ControlFlow::Continue;
                }
                _ => {}
            }
        }
        if key.code == KeyCode::Tab {
            self.cycle_focus();
            return ControlFlow::Continue;
        }
        if let Some(focused) = self.registry.focused() {
            self.forward_to_panel(focused, event);
        }
        ControlFlow::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A new press always supersedes any drag the terminal
                // never delivered an Up for.
                self.end_drag();
                if let Some(id) = dock::hit_test(self.area, mouse.column, mouse.row) {
                    if self.registry.is_open(id) {
                        self.close_panel(id);
                    } else {
                        self.open_panel(id);
                    }
                    return;
                }
                let Some((id, frame)) = self.window_at(mouse.column, mouse.row) else {
                    return;
                };
                match chrome::hit_test(frame, mouse.column, mouse.row) {
                    Some(ChromeHit::Close) => self.close_panel(id),
                    Some(ChromeHit::Minimize) => {
                        self.registry.focus(id);
                        if let Some(window) = self.windows.get_mut(&id) {
                            window.toggle_minimized();
                        }
                    }
                    Some(ChromeHit::TitleBar) => {
                        self.registry.focus(id);
                        if self.registry.mode() == ViewportMode::Desktop
                            && let Some(window) = self.windows.get_mut(&id)
                        {
                            window.begin_drag(mouse.column, mouse.row);
                            self.drag_target = Some(id);
                        }
                    }
                    Some(ChromeHit::Body) => {
                        self.registry.focus(id);
                        self.forward_to_panel(id, &Event::Mouse(mouse));
                    }
                    None => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(id) = self.drag_target
                    && let Some(window) = self.windows.get_mut(&id)
                {
                    window.drag_to(mouse.column, mouse.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.end_drag(),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if let Some((id, _)) = self.window_at(mouse.column, mouse.row) {
                    self.forward_to_panel(id, &Event::Mouse(mouse));
                }
            }
            _ => {}
        }
    }

    fn end_drag(&mut self) {
        if let Some(id) = self.drag_target.take()
            && let Some(window) = self.windows.get_mut(&id)
        {
            window.end_drag();
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        self.area = frame.area();
        let palette = self.theme.palette();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.desktop_bg).fg(palette.desktop_fg)),
            self.area,
        );
        if self.registry.mode() == ViewportMode::Desktop {
            sidebar::render(frame, self.area, &palette);
        }

        for id in self.z_order() {
            let Some(win_frame) = self.window_frame(id) else {
                continue;
            };
            if win_frame.visible(self.area).is_none() {
                continue;
            }
            let focused = self.registry.focused() == Some(id);
            let minimized = self.windows.get(&id).is_some_and(FloatWindow::minimized);
            let mode = self.registry.mode();
            let local = Rect {
                x: 0,
                y: 0,
                width: win_frame.width,
                height: win_frame.height,
            };
            let mut surface = Buffer::empty(local);
            {
                let mut offscreen = UiFrame::from_parts(local, &mut surface);
                let title = self.view_mut(id).title();
                chrome::render(&mut offscreen, local, &title, focused, minimized, &palette);
                if !minimized {
                    let content = Rect {
                        x: 1,
                        y: 2,
                        width: local.width.saturating_sub(2),
                        height: local.height.saturating_sub(chrome::CHROME_ROWS),
                    };
                    if content.width > 0 && content.height > 0 {
                        let ctx = PanelContext {
                            palette: &palette,
                            focused,
                            mode,
                        };
                        self.view_mut(id).render(&mut offscreen, content, &ctx);
                    }
                }
            }
            frame.blit_signed(&surface, win_frame);
        }

        dock::render(frame, self.area, &self.registry, &palette);
        if self.registry.mode() == ViewportMode::Desktop {
            self.hint.render(frame, self.area, &palette);
        }
        if self.help_visible {
            help::render(frame, self.area, &palette);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> Desktop {
        let mut desk = Desktop::new(Theme::Dark, None, None);
        desk.resize(120, 40, Some(1024));
        desk
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn first_desktop_entry_opens_the_defaults() {
        let desk = desk();
        assert_eq!(
            desk.registry().open_panels(),
            &[PanelId::About, PanelId::Playlist]
        );
        assert_eq!(desk.registry().focused(), Some(PanelId::Playlist));
    }

    #[test]
    fn first_mobile_entry_opens_about_only() {
        let mut desk = Desktop::new(Theme::Dark, None, None);
        desk.resize(60, 30, Some(480));
        assert_eq!(desk.registry().open_panels(), &[PanelId::About]);
    }

    #[test]
    fn shrinking_collapses_to_one_window() {
        let mut desk = desk();
        desk.handle_event(&Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Tab,
            KeyModifiers::NONE,
        )));
        assert_eq!(desk.registry().focused(), Some(PanelId::About));
        desk.resize(60, 30, Some(480));
        assert_eq!(desk.registry().open_panels(), &[PanelId::About]);
        // growing back does not restore the playlist
        desk.resize(120, 40, Some(1024));
        assert_eq!(desk.registry().open_panels(), &[PanelId::About]);
    }

    #[test]
    fn title_bar_drag_moves_the_window() {
        let mut desk = desk();
        // playlist spawns at (56, 3); its title bar is row 4
        desk.handle_event(&click(60, 4));
        assert!(desk.window(PanelId::Playlist).unwrap().is_dragging());
        desk.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 70,
            row: 9,
            modifiers: KeyModifiers::NONE,
        }));
        desk.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 70,
            row: 9,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(desk.window(PanelId::Playlist).unwrap().origin(), (66, 8));
    }

    #[test]
    fn close_button_closes_without_refocusing() {
        let mut desk = desk();
        // playlist frame: x=56 w=36, close control at x + 36 - 4 = 88, row 4
        desk.handle_event(&click(88, 4));
        assert!(!desk.registry().is_open(PanelId::Playlist));
        assert_eq!(desk.registry().focused(), None);
        assert!(desk.window(PanelId::Playlist).is_none());
    }

    #[test]
    fn minimize_button_collapses_the_window() {
        let mut desk = desk();
        // playlist minimize control at x + 36 - 8 = 84, row 4
        desk.handle_event(&click(84, 4));
        assert!(desk.window(PanelId::Playlist).unwrap().minimized());
        desk.handle_event(&click(84, 4));
        assert!(!desk.window(PanelId::Playlist).unwrap().minimized());
    }

    #[test]
    fn dock_click_toggles_a_window() {
        let mut desk = desk();
        let dock_row = dock::dock_row(Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        });
        // find the experience launcher by scanning the dock row
        let col = (0..120)
            .find(|&c| dock::hit_test(desk.area, c, dock_row) == Some(PanelId::Experience))
            .unwrap();
        desk.handle_event(&click(col, dock_row));
        assert!(desk.registry().is_open(PanelId::Experience));
        desk.handle_event(&click(col, dock_row));
        assert!(!desk.registry().is_open(PanelId::Experience));
    }

    #[test]
    fn project_click_opens_the_case_study_with_its_payload() {
        let mut desk = desk();
        desk.apply_request(PanelRequest::OpenCaseStudy(2));
        assert!(desk.registry().is_open(PanelId::CaseStudy));
        assert_eq!(desk.registry().case_study(), Some(2));
        assert_eq!(desk.case_study.project(), 2);
        desk.apply_request(PanelRequest::ShowProject(3));
        assert_eq!(desk.registry().case_study(), Some(3));
        // out of range indices are dropped
        desk.apply_request(PanelRequest::ShowProject(99));
        assert_eq!(desk.registry().case_study(), Some(3));
    }

    #[test]
    fn mobile_case_study_close_returns_to_projects() {
        let mut desk = Desktop::new(Theme::Dark, None, None);
        desk.resize(60, 30, Some(480));
        desk.apply_request(PanelRequest::OpenCaseStudy(1));
        assert_eq!(desk.registry().open_panels(), &[PanelId::CaseStudy]);
        desk.close_panel(PanelId::CaseStudy);
        assert_eq!(desk.registry().open_panels(), &[PanelId::Projects]);
    }

    #[test]
    fn quit_keys_respect_chat_focus() {
        let mut desk = desk();
        let q = Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        ));
        let ctrl_q = Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(desk.handle_event(&q), ControlFlow::Quit));
        desk.open_panel(PanelId::Chatbot);
        assert!(matches!(desk.handle_event(&q), ControlFlow::Continue));
        assert_eq!(desk.chatbot.input(), "q");
        assert!(matches!(desk.handle_event(&ctrl_q), ControlFlow::Quit));
    }

    #[test]
    fn theme_toggle_flips_and_sticks() {
        let mut desk = desk();
        let t = Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('t'),
            KeyModifiers::NONE,
        ));
        desk.handle_event(&t);
        assert_eq!(desk.theme(), Theme::Light);
        desk.handle_event(&t);
        assert_eq!(desk.theme(), Theme::Dark);
    }

    #[test]
    fn help_overlay_swallows_input_until_dismissed() {
        let mut desk = desk();
        desk.handle_event(&Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('?'),
            KeyModifiers::NONE,
        )));
        // 'q' dismisses the overlay instead of quitting
        let q = Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        ));
        assert!(matches!(desk.handle_event(&q), ControlFlow::Continue));
        assert!(matches!(desk.handle_event(&q), ControlFlow::Quit));
    }

    #[test]
    fn focused_window_paints_last() {
        let mut desk = desk();
        desk.open_panel(PanelId::Experience);
        assert_eq!(
            desk.z_order(),
            vec![PanelId::About, PanelId::Playlist, PanelId::Experience]
        );
        desk.handle_event(&Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Tab,
            KeyModifiers::NONE,
        )));
        assert_eq!(desk.registry().focused(), Some(PanelId::About));
        assert_eq!(
            desk.z_order(),
            vec![PanelId::Playlist, PanelId::Experience, PanelId::About]
        );
    }

    #[test]
    fn render_survives_offscreen_windows() {
        let mut desk = desk();
        desk.handle_event(&click(60, 4));
        desk.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        let area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        desk.render(&mut frame);
    }
}
