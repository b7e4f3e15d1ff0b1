use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};

use super::InputDriver;

/// Input driver backed by the real terminal via crossterm.
pub struct ConsoleDriver {
    event_queue: VecDeque<Event>,
}

impl Default for ConsoleDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self {
            event_queue: VecDeque::new(),
        }
    }
}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        if !self.event_queue.is_empty() {
            return Ok(true);
        }
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        if let Some(evt) = self.event_queue.pop_front() {
            return Ok(evt);
        }
        crossterm::event::read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        } else {
            crossterm::execute!(std::io::stdout(), DisableMouseCapture)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn queued_events_are_served_before_the_terminal() {
        let mut driver = ConsoleDriver::new();
        driver.event_queue.push_back(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(driver.poll(Duration::from_millis(0)).unwrap());
        match driver.read().unwrap() {
            Event::Key(key) => assert_eq!(key.code, KeyCode::Char('q')),
            other => panic!("expected a key event, got {other:?}"),
        }
    }
}
