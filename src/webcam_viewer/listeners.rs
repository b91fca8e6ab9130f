use crate::webcam_viewer::core::Event;
use std::collections::HashMap;
use std::time::Instant;

/// Signals raised by the window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSignal {
    ToggleClicked,
    TimerElapsed,
    WindowClosing,
}

type Listener = Box<dyn Fn(Instant) -> Event>;

/// Maps each UI signal to the handlers that turn it into viewer events.
pub struct EventListeners {
    table: HashMap<UiSignal, Vec<Listener>>,
}

impl EventListeners {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn on(&mut self, signal: UiSignal, listener: impl Fn(Instant) -> Event + 'static) {
        self.table
            .entry(signal)
            .or_default()
            .push(Box::new(listener));
    }

    /// Events for `signal`, in registration order.
    pub fn events_for(&self, signal: UiSignal, now: Instant) -> Vec<Event> {
        self.table
            .get(&signal)
            .map(|listeners| listeners.iter().map(|listener| listener(now)).collect())
            .unwrap_or_default()
    }
}

impl Default for EventListeners {
    fn default() -> Self {
        let mut listeners = Self::empty();
        listeners.on(UiSignal::ToggleClicked, |_| Event::ToggleClicked);
        listeners.on(UiSignal::TimerElapsed, Event::Tick);
        listeners.on(UiSignal::WindowClosing, |_| Event::Shutdown);
        listeners
    }
}
