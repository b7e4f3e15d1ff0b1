//! Single source of truth for which panels are open and which one is
//! focused.
//!
//! The registry knows nothing about geometry or rendering; the desktop
//! shell owns window placement and asks the registry only membership and
//! focus questions. Viewport policy is mediated here: in mobile mode at
//! most one panel may be open at a time.

use crate::viewport::ViewportMode;

/// One logical panel of the portfolio desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PanelId {
    About,
    Playlist,
    Experience,
    Projects,
    CaseStudy,
    Chatbot,
}

impl PanelId {
    pub const ALL: [PanelId; 6] = [
        PanelId::About,
        PanelId::Playlist,
        PanelId::Experience,
        PanelId::Projects,
        PanelId::CaseStudy,
        PanelId::Chatbot,
    ];
}

#[derive(Debug)]
pub struct Registry {
    open: Vec<PanelId>,
    focused: Option<PanelId>,
    mode: ViewportMode,
    // index into the project list; present iff the case-study panel is open
    case_study: Option<usize>,
}

impl Registry {
    pub fn new(mode: ViewportMode) -> Self {
        Self {
            open: Vec::new(),
            focused: None,
            mode,
            case_study: None,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn open_panels(&self) -> &[PanelId] {
        &self.open
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.open.contains(&id)
    }

    pub fn focused(&self) -> Option<PanelId> {
        self.focused
    }

    pub fn case_study(&self) -> Option<usize> {
        self.case_study
    }

    /// Open a panel and focus it. Opening an already-open panel is a
    /// membership no-op but still re-focuses it. In mobile mode every other
    /// panel is closed first.
    pub fn open(&mut self, id: PanelId) {
        if self.mode == ViewportMode::Mobile {
            let others: Vec<PanelId> = self.open.iter().copied().filter(|&p| p != id).collect();
            for other in others {
                self.close(other);
            }
        }
        if !self.open.contains(&id) {
            tracing::debug!(panel = ?id, "open panel");
            self.open.push(id);
        }
        if id == PanelId::CaseStudy && self.case_study.is_none() {
            self.case_study = Some(0);
        }
        self.focused = Some(id);
    }

    /// Open the case-study panel carrying the selected project index.
    pub fn open_case_study(&mut self, index: usize) {
        self.case_study = Some(index);
        self.open(PanelId::CaseStudy);
    }

    /// Replace the case-study payload. No-op while the panel is closed.
    pub fn set_case_study(&mut self, index: usize) {
        if self.is_open(PanelId::CaseStudy) {
            self.case_study = Some(index);
        }
    }

    /// Close a panel. Focus is cleared when the closed panel held it; no
    /// other panel is auto-focused (the mobile case-study-to-projects hop
    /// is special-cased by the desktop shell, not here).
    pub fn close(&mut self, id: PanelId) {
        if !self.open.contains(&id) {
            return;
        }
        tracing::debug!(panel = ?id, "close panel");
        self.open.retain(|&p| p != id);
        if id == PanelId::CaseStudy {
            self.case_study = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Desktop: flip membership. Mobile: open unless `id` is already the
    /// sole open panel, in which case close it.
    pub fn toggle(&mut self, id: PanelId) {
        match self.mode {
            ViewportMode::Desktop => {
                if self.is_open(id) {
                    self.close(id);
                } else {
                    self.open(id);
                }
            }
            ViewportMode::Mobile => {
                if self.open == [id] {
                    self.close(id);
                } else {
                    self.open(id);
                }
            }
        }
    }

    /// Focus an open panel. A focus request for a closed panel is a
    /// defensive no-op, not an error.
    pub fn focus(&mut self, id: PanelId) {
        if self.is_open(id) {
            self.focused = Some(id);
        }
    }

    /// Switch layout mode. Entering mobile collapses the open set to at
    /// most one panel: the focused one if any, else `About` if open, else
    /// nothing. Returning to desktop does not restore what was dropped.
    pub fn set_mode(&mut self, mode: ViewportMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!(?mode, "viewport mode change");
        self.mode = mode;
        if mode == ViewportMode::Mobile && self.open.len() > 1 {
            let keep = self
                .focused
                .or_else(|| self.is_open(PanelId::About).then_some(PanelId::About))
                .or_else(|| self.open.first().copied());
            let drop: Vec<PanelId> = self
                .open
                .iter()
                .copied()
                .filter(|&p| Some(p) != keep)
                .collect();
            for id in drop {
                self.close(id);
            }
            if let Some(keep) = keep {
                self.focused = Some(keep);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> Registry {
        Registry::new(ViewportMode::Desktop)
    }

    fn mobile() -> Registry {
        Registry::new(ViewportMode::Mobile)
    }

    #[test]
    fn open_inserts_and_focuses() {
        let mut reg = desktop();
        for id in PanelId::ALL {
            reg.open(id);
            assert!(reg.is_open(id));
            assert_eq!(reg.focused(), Some(id));
        }
        assert_eq!(reg.open_panels().len(), PanelId::ALL.len());
    }

    #[test]
    fn open_is_idempotent_for_membership_but_refocuses() {
        let mut reg = desktop();
        reg.open(PanelId::About);
        reg.open(PanelId::Playlist);
        reg.open(PanelId::About);
        reg.open(PanelId::About);
        assert_eq!(reg.open_panels(), &[PanelId::About, PanelId::Playlist]);
        assert_eq!(reg.focused(), Some(PanelId::About));
    }

    #[test]
    fn close_clears_focus_without_refocusing() {
        let mut reg = desktop();
        reg.open(PanelId::About);
        reg.open(PanelId::Playlist);
        reg.close(PanelId::Playlist);
        assert!(!reg.is_open(PanelId::Playlist));
        assert_eq!(reg.focused(), None);
        // closing a non-focused panel leaves focus alone
        reg.open(PanelId::Experience);
        reg.open(PanelId::Projects);
        reg.close(PanelId::Experience);
        assert_eq!(reg.focused(), Some(PanelId::Projects));
    }

    #[test]
    fn focus_requires_membership() {
        let mut reg = desktop();
        reg.open(PanelId::About);
        reg.focus(PanelId::Chatbot);
        assert_eq!(reg.focused(), Some(PanelId::About));
        reg.open(PanelId::Chatbot);
        reg.focus(PanelId::About);
        assert_eq!(reg.focused(), Some(PanelId::About));
    }

    #[test]
    fn toggle_desktop_flips_membership() {
        let mut reg = desktop();
        reg.toggle(PanelId::Experience);
        assert!(reg.is_open(PanelId::Experience));
        assert_eq!(reg.focused(), Some(PanelId::Experience));
        reg.toggle(PanelId::Experience);
        assert!(!reg.is_open(PanelId::Experience));
    }

    #[test]
    fn mobile_keeps_at_most_one_panel_open() {
        let mut reg = mobile();
        for id in [PanelId::About, PanelId::Playlist, PanelId::Projects] {
            reg.open(id);
            assert!(reg.open_panels().len() <= 1);
            assert_eq!(reg.focused(), Some(id));
        }
        assert_eq!(reg.open_panels(), &[PanelId::Projects]);
    }

    #[test]
    fn mobile_open_sequence_keeps_last() {
        // width 500px scenario: about then playlist requested in sequence
        let mut reg = mobile();
        reg.open(PanelId::About);
        reg.open(PanelId::Playlist);
        assert_eq!(reg.open_panels(), &[PanelId::Playlist]);
        assert!(!reg.is_open(PanelId::About));
    }

    #[test]
    fn mobile_toggle_closes_sole_panel() {
        let mut reg = mobile();
        reg.toggle(PanelId::About);
        assert_eq!(reg.open_panels(), &[PanelId::About]);
        reg.toggle(PanelId::About);
        assert!(reg.open_panels().is_empty());
        // toggling a different panel while one is open swaps
        reg.toggle(PanelId::About);
        reg.toggle(PanelId::Chatbot);
        assert_eq!(reg.open_panels(), &[PanelId::Chatbot]);
    }

    #[test]
    fn case_study_payload_tracks_membership() {
        let mut reg = desktop();
        assert_eq!(reg.case_study(), None);
        reg.open_case_study(2);
        assert_eq!(reg.case_study(), Some(2));
        reg.set_case_study(3);
        assert_eq!(reg.case_study(), Some(3));
        reg.close(PanelId::CaseStudy);
        assert_eq!(reg.case_study(), None);
        reg.set_case_study(1);
        assert_eq!(reg.case_study(), None);
    }

    #[test]
    fn entering_mobile_collapses_to_focused_panel() {
        let mut reg = desktop();
        reg.open(PanelId::About);
        reg.open(PanelId::Playlist);
        reg.open(PanelId::Projects);
        reg.focus(PanelId::Playlist);
        reg.set_mode(ViewportMode::Mobile);
        assert_eq!(reg.open_panels(), &[PanelId::Playlist]);
        assert_eq!(reg.focused(), Some(PanelId::Playlist));
    }

    #[test]
    fn entering_mobile_without_focus_prefers_about() {
        let mut reg = desktop();
        reg.open(PanelId::Playlist);
        reg.open(PanelId::About);
        reg.open(PanelId::Experience);
        reg.close(PanelId::Experience); // focused panel closed, focus now None
        assert_eq!(reg.focused(), None);
        reg.set_mode(ViewportMode::Mobile);
        assert_eq!(reg.open_panels(), &[PanelId::About]);
    }

    #[test]
    fn returning_to_desktop_does_not_restore() {
        let mut reg = desktop();
        reg.open(PanelId::About);
        reg.open(PanelId::Playlist);
        reg.set_mode(ViewportMode::Mobile);
        reg.set_mode(ViewportMode::Desktop);
        assert_eq!(reg.open_panels(), &[PanelId::Playlist]);
    }
}
