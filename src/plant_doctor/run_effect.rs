use crate::config::Config;
use crate::device_input::interface::DeviceInput;
use crate::error::InferenceError;
use crate::inference::adapter::InferenceAdapter;
use crate::inference::select::select_label;
use crate::leaf_image::LeafImage;
use crate::library::logger::interface::Logger;
use crate::model_host::handle::ModelHandle;
use crate::model_host::interface::ModelLoader;
use crate::plant_doctor::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    model_loader: Arc<dyn ModelLoader>,
    model_handle: ModelHandle,
    device_input: Arc<dyn DeviceInput + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_loader: Arc<dyn ModelLoader>,
        model_handle: ModelHandle,
        device_input: Arc<dyn DeviceInput + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            model_loader,
            model_handle,
            device_input,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeToInputEvents => {
                let events = self.device_input.events();
                while let Ok(event) = events.recv() {
                    if event_sender.send(Event::InputEvent(event)).is_err() {
                        return;
                    }
                }
            }
            Effect::LoadModel => {
                let loaded = self
                    .model_loader
                    .load(&self.config.model)
                    .and_then(|host| self.model_handle.set(host));
                match &loaded {
                    Ok(()) => {
                        let _ = self.logger.info(&format!(
                            "Model loaded from {}",
                            self.config.model.model_path.display()
                        ));
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!("Failed to load model: {}", e));
                    }
                }
                let _ = event_sender.send(Event::ModelLoadDone(loaded));
            }
            Effect::ReadImage { path } => {
                let image = LeafImage::read(&path);
                let _ = event_sender.send(Event::ImageReadDone(image));
            }
            Effect::Predict { request, image } => self.predict(request, &image, &event_sender),
        }
    }

    /// Emits `PreprocessDone` and, only when that succeeded, `InferDone`.
    /// Both carry `request`.
    fn predict(&self, request: u64, image: &LeafImage, event_sender: &Sender<Event>) {
        let Some(host) = self.model_handle.get() else {
            let _ = event_sender.send(Event::PreprocessDone {
                request,
                result: Err(InferenceError::ModelNotLoaded),
            });
            return;
        };
        let adapter = InferenceAdapter::new(host);

        let input = match adapter.preprocess(&image.bytes) {
            Ok(input) => input,
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Preprocessing {} failed: {}", image.name, e));
                let _ = event_sender.send(Event::PreprocessDone {
                    request,
                    result: Err(e),
                });
                return;
            }
        };
        let _ = event_sender.send(Event::PreprocessDone {
            request,
            result: Ok(()),
        });

        let prediction = adapter.infer(input).map(|scores| select_label(&scores));
        match &prediction {
            Ok(prediction) => {
                let _ = self.logger.info(&format!(
                    "{} -> {} ({}%)",
                    image.name,
                    prediction.label,
                    prediction.confidence_percent()
                ));
            }
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Inference on {} failed: {}", image.name, e));
            }
        }
        let _ = event_sender.send(Event::InferDone {
            request,
            result: prediction,
        });
    }
}
