//! Viewport transitions driven through the public desk API: the collapse
//! to a single window on small screens, the per-mode default windows, and
//! the mobile case-study escape hatch.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use deskfolio::desktop::Desktop;
use deskfolio::dock;
use deskfolio::registry::PanelId;
use deskfolio::theme::Theme;

fn click(desk: &mut Desktop, column: u16, row: u16) {
    desk.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

fn mouse(desk: &mut Desktop, kind: MouseEventKind, column: u16, row: u16) {
    desk.handle_event(&Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

#[test]
fn shrinking_keeps_only_the_focused_window() {
    let mut desk = Desktop::new(Theme::Dark, None, None);
    desk.resize(120, 40, Some(1024));
    assert_eq!(
        desk.registry().open_panels(),
        &[PanelId::About, PanelId::Playlist]
    );
    desk.resize(60, 30, Some(480));
    // the playlist had focus, so it survives the collapse
    assert_eq!(desk.registry().open_panels(), &[PanelId::Playlist]);
    // growing back does not resurrect the about window
    desk.resize(120, 40, Some(1024));
    assert_eq!(desk.registry().open_panels(), &[PanelId::Playlist]);
}

#[test]
fn a_desk_born_mobile_opens_about_only() {
    let mut desk = Desktop::new(Theme::Dark, None, None);
    desk.resize(60, 30, Some(500));
    assert_eq!(desk.registry().open_panels(), &[PanelId::About]);
    assert_eq!(desk.registry().focused(), Some(PanelId::About));
}

#[test]
fn mobile_dock_swaps_windows_instead_of_stacking() {
    let mut desk = Desktop::new(Theme::Dark, None, None);
    desk.resize(60, 30, Some(500));
    let area = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 30,
    };
    let row = dock::dock_row(area);
    let chat_col = (0..60)
        .find(|&col| dock::hit_test(area, col, row) == Some(PanelId::Chatbot))
        .unwrap();
    click(&mut desk, chat_col, row);
    assert_eq!(desk.registry().open_panels(), &[PanelId::Chatbot]);
}

#[test]
fn closing_a_mobile_case_study_returns_to_the_gallery() {
    let mut desk = Desktop::new(Theme::Dark, None, None);
    desk.resize(60, 30, Some(500));
    let area = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 30,
    };
    let row = dock::dock_row(area);
    let projects_col = (0..60)
        .find(|&col| dock::hit_test(area, col, row) == Some(PanelId::Projects))
        .unwrap();
    click(&mut desk, projects_col, row);
    assert_eq!(desk.registry().open_panels(), &[PanelId::Projects]);

    // the full-bleed gallery shows its third card fourteen rows down
    click(&mut desk, 5, 15);
    assert_eq!(desk.registry().open_panels(), &[PanelId::CaseStudy]);
    assert_eq!(desk.registry().case_study(), Some(2));

    // the close control sits near the right edge of the title row
    click(&mut desk, 56, 1);
    assert_eq!(desk.registry().open_panels(), &[PanelId::Projects]);
    assert_eq!(desk.registry().case_study(), None);
}

#[test]
fn windows_drag_beyond_the_screen_edge() {
    let mut desk = Desktop::new(Theme::Dark, None, None);
    desk.resize(120, 40, Some(1024));
    // grab the playlist title bar four cells in from its corner at (56, 3)
    mouse(&mut desk, MouseEventKind::Down(MouseButton::Left), 60, 4);
    assert!(desk.window(PanelId::Playlist).unwrap().is_dragging());
    mouse(&mut desk, MouseEventKind::Drag(MouseButton::Left), 2, 0);
    mouse(&mut desk, MouseEventKind::Up(MouseButton::Left), 2, 0);
    assert_eq!(desk.window(PanelId::Playlist).unwrap().origin(), (-2, -1));
    assert!(!desk.window(PanelId::Playlist).unwrap().is_dragging());
}

#[test]
fn mobile_windows_do_not_drag() {
    let mut desk = Desktop::new(Theme::Dark, None, None);
    desk.resize(60, 30, Some(500));
    // the full-bleed window's title row is row 1
    mouse(&mut desk, MouseEventKind::Down(MouseButton::Left), 20, 1);
    assert!(!desk.window(PanelId::About).unwrap().is_dragging());
}
