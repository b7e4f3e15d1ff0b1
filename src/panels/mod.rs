//! Panel content views.
//!
//! Every panel implements [`PanelView`] and is hosted inside the same
//! generic floating window; the shell injects the content region and the
//! render context. Panels never touch the registry directly — anything
//! that changes desk-level state is reported upward as a
//! [`PanelRequest`].

pub mod about;
pub mod case_study;
pub mod chatbot;
pub mod experience;
pub mod playlist;
pub mod projects;

pub use about::AboutPanel;
pub use case_study::CaseStudyPanel;
pub use chatbot::ChatbotPanel;
pub use experience::ExperiencePanel;
pub use playlist::PlaylistPanel;
pub use projects::ProjectsPanel;

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::theme::Palette;
use crate::ui::UiFrame;
use crate::viewport::ViewportMode;

/// Render/event context handed to panels by the desktop shell.
#[derive(Debug, Clone, Copy)]
pub struct PanelContext<'a> {
    pub palette: &'a Palette,
    pub focused: bool,
    pub mode: ViewportMode,
}

/// Desk-level effects a panel may request from its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRequest {
    /// Open the case-study panel for the project at this list index.
    OpenCaseStudy(usize),
    /// Swap the case-study payload to this list index.
    ShowProject(usize),
}

pub trait PanelView {
    /// Title shown in the window chrome.
    fn title(&self) -> String;

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &PanelContext<'_>);

    /// Handle an event whose mouse coordinates are local to `area`.
    /// Returns a request when the panel needs its owner to act.
    fn handle_event(
        &mut self,
        _event: &Event,
        _area: Rect,
        _ctx: &PanelContext<'_>,
    ) -> Option<PanelRequest> {
        None
    }
}
