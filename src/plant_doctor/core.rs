use crate::config::Config;
use crate::device_input::interface::DeviceInputEvent;
use crate::error::{AssetLoadError, InferenceError};
use crate::inference::select::Prediction;
use crate::leaf_image::LeafImage;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModelState {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum PredictionState {
    #[default]
    Idle,
    Preprocessing,
    Inferring,
    Resolved(Prediction),
    /// Last attempt failed; accepts a new request like `Idle`.
    Failed,
}

impl PredictionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            PredictionState::Preprocessing | PredictionState::Inferring
        )
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct State {
    pub model: ModelState,
    pub image: Option<LeafImage>,
    pub prediction: PredictionState,
    pub error: Option<String>,
    /// Id of the newest predict request. Stage reports carrying any other id
    /// are dropped.
    pub request: u64,
    pub quit: bool,
}

impl State {
    pub fn can_diagnose(&self) -> bool {
        self.model == ModelState::Ready && self.image.is_some() && !self.prediction.is_in_flight()
    }
}

#[derive(Debug)]
pub enum Event {
    InputEvent(DeviceInputEvent),
    ModelLoadDone(Result<(), AssetLoadError>),
    ImageReadDone(Result<LeafImage, InferenceError>),
    PreprocessDone {
        request: u64,
        result: Result<(), InferenceError>,
    },
    InferDone {
        request: u64,
        result: Result<Prediction, InferenceError>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeToInputEvents,
    LoadModel,
    ReadImage { path: PathBuf },
    Predict { request: u64, image: LeafImage },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Predict { request, image } => {
                format!("Predict {{ request: {}, image: {:?} }}", request, image.name)
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    let mut effects = vec![Effect::SubscribeToInputEvents, Effect::LoadModel];

    if let Some(path) = &config.initial_image {
        effects.push(Effect::ReadImage { path: path.clone() });
    }

    (State::default(), effects)
}

pub fn transition(_config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::ModelLoadDone(Ok(())) => (
            State {
                model: ModelState::Ready,
                ..state
            },
            vec![],
        ),
        Event::ModelLoadDone(Err(e)) => (
            State {
                model: ModelState::Failed {
                    message: e.to_string(),
                },
                ..state
            },
            vec![],
        ),

        Event::InputEvent(DeviceInputEvent::ImageChosen(path)) => {
            if state.prediction.is_in_flight() {
                (state, vec![])
            } else {
                (state, vec![Effect::ReadImage { path }])
            }
        }
        Event::InputEvent(DeviceInputEvent::ImageDropped(image))
        | Event::ImageReadDone(Ok(image)) => {
            if state.prediction.is_in_flight() {
                (state, vec![])
            } else {
                (
                    State {
                        image: Some(image),
                        prediction: PredictionState::Idle,
                        error: None,
                        ..state
                    },
                    vec![],
                )
            }
        }
        Event::ImageReadDone(Err(e)) => (
            State {
                error: Some(e.to_string()),
                ..state
            },
            vec![],
        ),

        Event::InputEvent(DeviceInputEvent::DiagnosePressed) => {
            if !state.can_diagnose() {
                return (state, vec![]);
            }
            let Some(image) = state.image.clone() else {
                return (state, vec![]);
            };
            let request = state.request.wrapping_add(1);
            (
                State {
                    prediction: PredictionState::Preprocessing,
                    error: None,
                    request,
                    ..state
                },
                vec![Effect::Predict { request, image }],
            )
        }

        Event::PreprocessDone { request, result }
            if request == state.request && state.prediction == PredictionState::Preprocessing =>
        {
            match result {
                Ok(()) => (
                    State {
                        prediction: PredictionState::Inferring,
                        ..state
                    },
                    vec![],
                ),
                Err(e) => (
                    State {
                        prediction: PredictionState::Failed,
                        error: Some(e.to_string()),
                        ..state
                    },
                    vec![],
                ),
            }
        }
        Event::InferDone { request, result }
            if request == state.request && state.prediction == PredictionState::Inferring =>
        {
            match result {
                Ok(prediction) => (
                    State {
                        prediction: PredictionState::Resolved(prediction),
                        ..state
                    },
                    vec![],
                ),
                Err(e) => (
                    State {
                        prediction: PredictionState::Failed,
                        error: Some(e.to_string()),
                        ..state
                    },
                    vec![],
                ),
            }
        }

        // Also retires any request still in flight.
        Event::InputEvent(DeviceInputEvent::ResetPressed) => (
            State {
                image: None,
                prediction: PredictionState::Idle,
                error: None,
                request: state.request.wrapping_add(1),
                ..state
            },
            vec![],
        ),
        Event::InputEvent(DeviceInputEvent::QuitPressed) => (
            State {
                quit: true,
                ..state
            },
            vec![],
        ),

        // Stale stage reports from a request that was reset or replaced.
        Event::PreprocessDone { .. } | Event::InferDone { .. } => (state, vec![]),
    }
}
