//! TUI event handling
//!
//! Synchronous event polling. The application has one logical thread of
//! control, so events are read with a timeout poll instead of a background
//! thread; the timeout doubles as the render tick.

use std::time::Duration;

use crossterm::event::{self, KeyEvent};
use eyre::Result;
use log::debug;

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick (poll timeout elapsed, redraw)
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    /// How long to wait for an event before emitting a tick
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Block for up to one tick and return the next event
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        match event::read()? {
            event::Event::Key(key) => Ok(Event::Key(key)),
            event::Event::Resize(w, h) => Ok(Event::Resize(w, h)),
            other => {
                debug!("Ignoring terminal event: {:?}", other);
                Ok(Event::Tick)
            }
        }
    }
}
