use crate::config::Config;
use crate::error::InferenceError;
use crate::library::logger::interface::Logger;
use crate::webcam_viewer::core::{init, transition, Event, Model};
use crate::webcam_viewer::listeners::{EventListeners, UiSignal};
use crate::webcam_viewer::run_effect::RunEffect;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Single-threaded event loop core. Events are handled strictly in the order
/// they were queued; effects run synchronously and queue their follow-ups at the back.
pub struct Dispatcher {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    model: Model,
    queue: VecDeque<Event>,
    listeners: EventListeners,
    run_effect: RunEffect,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        listeners: EventListeners,
        run_effect: RunEffect,
    ) -> Self {
        let model = init(&config);
        Self {
            config,
            logger: logger.with_namespace("dispatcher"),
            model,
            queue: VecDeque::new(),
            listeners,
            run_effect,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn post(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Queues every event bound to `signal`, then drains the queue.
    pub fn emit(&mut self, signal: UiSignal, now: Instant) -> Result<(), InferenceError> {
        for event in self.listeners.events_for(signal, now) {
            self.post(event);
        }
        self.drain(now)
    }

    /// Raises `TimerElapsed` if the poll timer is due. Returns whether it fired.
    pub fn poll_timer(&mut self, now: Instant) -> Result<bool, InferenceError> {
        if !self.run_effect.fire_timer_if_due(now) {
            return Ok(false);
        }
        self.emit(UiSignal::TimerElapsed, now)?;
        Ok(true)
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.run_effect.time_until_next_tick(now)
    }

    pub fn drain(&mut self, now: Instant) -> Result<(), InferenceError> {
        while let Some(event) = self.queue.pop_front() {
            self.logger
                .debug(&format!("Event: {}", event.to_display_string()));

            let (model, effects) = transition(&self.config, std::mem::take(&mut self.model), event);
            self.model = model;

            if !effects.is_empty() {
                self.logger.debug(&format!("Effects: {:?}", effects));
            }

            for effect in effects {
                match self.run_effect.run_effect(effect, now) {
                    Ok(Some(follow_up)) => self.queue.push_back(follow_up),
                    Ok(None) => {}
                    Err(e) => {
                        self.queue.clear();
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }
}
