use crate::device_display::interface::{DeviceDisplay, ModelStatus, Screen, ScreenResult};
use crate::label::display_name;
use crate::plant_doctor::core::{ModelState, PredictionState, State};
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;

        device_display.show(&screen(state))?;

        Ok(())
    }
}

pub fn screen(state: &State) -> Screen {
    let status = match &state.model {
        ModelState::Loading => ModelStatus::Initializing,
        ModelState::Ready => ModelStatus::Online,
        ModelState::Failed { message } => ModelStatus::Unavailable(message.clone()),
    };

    let result = match &state.prediction {
        PredictionState::Resolved(prediction) => Some(ScreenResult {
            title: display_name(prediction.label),
            confidence: prediction.confidence,
            confidence_percent: prediction.confidence_percent(),
            advice: prediction.advice(),
        }),
        _ => None,
    };

    Screen {
        status,
        image_name: state.image.as_ref().map(|image| image.name.clone()),
        busy: state.prediction.is_in_flight(),
        can_diagnose: state.can_diagnose(),
        error: state.error.clone(),
        result,
    }
}
