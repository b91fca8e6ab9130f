use crate::config::Config;
use crate::error::InferenceError;
use crate::frame_source::interface::FrameSource;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::overlay;
use crate::preprocessor::preprocess;
use crate::webcam_viewer::core::{CycleOutcome, Effect, Event};
use crate::webcam_viewer::poll_timer::PollTimer;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Owns the camera, the model and the poll timer, and performs effects against them.
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    frame_source: Box<dyn FrameSource>,
    image_classifier: Box<dyn ImageClassifier>,
    poll_timer: PollTimer,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        frame_source: Box<dyn FrameSource>,
        image_classifier: Box<dyn ImageClassifier>,
    ) -> Self {
        let poll_timer = PollTimer::new(config.poll_interval);
        Self {
            config,
            logger: logger.with_namespace("run_effect"),
            frame_source,
            image_classifier,
            poll_timer,
        }
    }

    /// Runs one effect to completion. A follow-up event, if any, is returned for the queue.
    pub fn run_effect(
        &mut self,
        effect: Effect,
        now: Instant,
    ) -> Result<Option<Event>, InferenceError> {
        self.logger.debug(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::StartTimer => {
                self.poll_timer.start(now);
                Ok(None)
            }
            Effect::StopTimer => {
                self.poll_timer.stop();
                Ok(None)
            }
            Effect::RunPollCycle => {
                let outcome = self.run_poll_cycle()?;
                Ok(Some(Event::CycleFinished(outcome)))
            }
            Effect::ReleaseCamera => {
                self.frame_source.release();
                Ok(None)
            }
        }
    }

    pub fn fire_timer_if_due(&mut self, now: Instant) -> bool {
        self.poll_timer.fire_if_due(now)
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.poll_timer.time_until_due(now)
    }

    fn run_poll_cycle(&mut self) -> Result<CycleOutcome, InferenceError> {
        let frame = match self.frame_source.read() {
            Ok(frame) => frame,
            Err(failure) => {
                self.logger.warn(&format!("Skipping tick: {}", failure));
                return Ok(CycleOutcome::CaptureFailed(failure));
            }
        };

        let tensor = preprocess(&frame)?;
        let classification = self.image_classifier.classify(tensor)?;
        let annotated = overlay::render(&frame, &classification, &self.config.overlay);

        self.logger.debug(&format!(
            "Classified frame as {} ({:.2})",
            classification.label, classification.confidence
        ));

        Ok(CycleOutcome::Rendered {
            annotated,
            classification,
        })
    }
}
