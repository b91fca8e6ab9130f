use crate::config::Config;
use crate::error::CaptureFailure;
use crate::image_classifier::interface::Classification;
use crate::overlay::AnnotatedFrame;
use std::time::Instant;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            RunState::Idle => "Start",
            RunState::Running => "Stop",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stats {
    pub cycles_rendered: u64,
    pub capture_failures: u64,
    pub ticks_skipped: u64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Model {
    pub run_state: RunState,
    pub tick_in_flight: bool,
    pub shutting_down: bool,
    pub title: String,
    pub display: Option<AnnotatedFrame>,
    pub stats: Stats,
}

#[derive(Debug)]
pub enum CycleOutcome {
    Rendered {
        annotated: AnnotatedFrame,
        classification: Classification,
    },
    CaptureFailed(CaptureFailure),
}

#[derive(Debug)]
pub enum Event {
    ToggleClicked,
    Tick(Instant),
    CycleFinished(CycleOutcome),
    Shutdown,
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::CycleFinished(CycleOutcome::Rendered { classification, .. }) => {
                format!("CycleFinished(Rendered({:?}))", classification)
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartTimer,
    StopTimer,
    RunPollCycle,
    ReleaseCamera,
}

pub fn init(config: &Config) -> Model {
    Model {
        title: config.window.title.clone(),
        ..Model::default()
    }
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.run_state, event) {
        (_, Event::Shutdown) => (
            Model {
                run_state: RunState::Idle,
                shutting_down: true,
                ..model
            },
            vec![Effect::StopTimer, Effect::ReleaseCamera],
        ),

        (_, Event::ToggleClicked) if model.shutting_down => (model, vec![]),

        (RunState::Idle, Event::ToggleClicked) => (
            Model {
                run_state: model.run_state.toggled(),
                ..model
            },
            vec![Effect::StartTimer],
        ),
        // An in-flight tick is left alone and still renders when it finishes.
        (RunState::Running, Event::ToggleClicked) => (
            Model {
                run_state: model.run_state.toggled(),
                ..model
            },
            vec![Effect::StopTimer],
        ),

        (RunState::Running, Event::Tick(_)) => {
            if model.tick_in_flight {
                let mut stats = model.stats.clone();
                stats.ticks_skipped += 1;
                (Model { stats, ..model }, vec![])
            } else {
                (
                    Model {
                        tick_in_flight: true,
                        ..model
                    },
                    vec![Effect::RunPollCycle],
                )
            }
        }
        (RunState::Idle, Event::Tick(_)) => (model, vec![]),

        (
            _,
            Event::CycleFinished(CycleOutcome::Rendered {
                annotated,
                classification,
            }),
        ) => {
            let mut stats = model.stats.clone();
            stats.cycles_rendered += 1;
            (
                Model {
                    tick_in_flight: false,
                    title: format!(
                        "{} - Class: {}",
                        config.window.title_prefix, classification.label
                    ),
                    display: Some(annotated),
                    stats,
                    ..model
                },
                vec![],
            )
        }
        (_, Event::CycleFinished(CycleOutcome::CaptureFailed(_))) => {
            let mut stats = model.stats.clone();
            stats.capture_failures += 1;
            (
                Model {
                    tick_in_flight: false,
                    stats,
                    ..model
                },
                vec![],
            )
        }
    }
}
