use crate::device_display::interface::{DeviceDisplay, ModelStatus, Screen};
use crate::device_input::interface::{DeviceInput, DeviceInputEvent};
use crate::leaf_image::LeafImage;
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
const WARNING: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
const DANGER: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct PlantDoctorWindow {
    screen: Arc<Mutex<Option<Screen>>>,
    events: Arc<Mutex<Option<Sender<DeviceInputEvent>>>>,
    path_input: String,
}

impl PlantDoctorWindow {
    fn send(&self, event: DeviceInputEvent) {
        if let Some(tx) = lock(&self.events).as_ref() {
            let _ = tx.send(event);
        }
    }

    fn handle_dropped_files(&self, files: Vec<egui::DroppedFile>) {
        // Only the first file counts, like a single-file picker.
        let Some(file) = files.into_iter().next() else {
            return;
        };

        match (file.bytes, file.path) {
            (Some(bytes), path) => {
                let name = match path {
                    Some(path) => path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or(file.name),
                    None => file.name,
                };
                self.send(DeviceInputEvent::ImageDropped(LeafImage::new(name, bytes)));
            }
            (None, Some(path)) => self.send(DeviceInputEvent::ImageChosen(path)),
            (None, None) => {}
        }
    }

    fn show_result(ui: &mut egui::Ui, screen: &Screen) {
        let Some(result) = &screen.result else {
            return;
        };

        ui.separator();
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(result.title.as_str()).color(ACCENT));
        });
        ui.add(
            egui::ProgressBar::new(result.confidence)
                .text(format!("Confidence {}%", result.confidence_percent)),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(result.advice.name).strong());
        ui.label(result.advice.description);
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Treatment").strong());
        ui.label(result.advice.treatment);
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Prevention").strong());
        ui.label(result.advice.prevention);
    }
}

impl eframe::App for PlantDoctorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // State changes arrive from the worker thread.
        ctx.request_repaint_after(Duration::from_millis(100));

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.handle_dropped_files(dropped);
        }

        let screen = lock(&self.screen).clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading("Plant Doctor");
                ui.label("Leaf disease detection");
                ui.add_space(12.0);
            });

            let Some(screen) = screen else {
                ui.label("Starting...");
                return;
            };

            if let Some(error) = &screen.error {
                ui.colored_label(DANGER, error.as_str());
                ui.add_space(8.0);
            }

            match &screen.image_name {
                Some(name) => ui.label(format!("Image: {}", name)),
                None => ui.label("Drop a leaf photo on this window or enter its path."),
            };

            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut self.path_input);
                let path = self.path_input.trim().to_string();
                if ui
                    .add_enabled(!screen.busy && !path.is_empty(), egui::Button::new("Open"))
                    .clicked()
                {
                    self.send(DeviceInputEvent::ImageChosen(PathBuf::from(path)));
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.path_input.clear();
                    self.send(DeviceInputEvent::ResetPressed);
                }
                let label = if screen.busy {
                    "Analyzing..."
                } else {
                    "Diagnose Disease"
                };
                if ui
                    .add_enabled(screen.can_diagnose, egui::Button::new(label))
                    .clicked()
                {
                    self.send(DeviceInputEvent::DiagnosePressed);
                }
            });

            Self::show_result(ui, &screen);

            ui.separator();
            let color = match screen.status {
                ModelStatus::Online => ACCENT,
                ModelStatus::Initializing => WARNING,
                ModelStatus::Unavailable(_) => DANGER,
            };
            ui.colored_label(color, screen.status_line());
        });
    }
}

/// Desktop window acting as both display and input.
#[derive(Clone, Default)]
pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Option<Screen>>>,
    events: Arc<Mutex<Option<Sender<DeviceInputEvent>>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the window closes, then asks the app to quit. Must be
    /// called from the main thread.
    pub fn run_window(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("Plant Doctor")
                .with_inner_size([480.0, 640.0])
                .with_drag_and_drop(true),
            ..Default::default()
        };

        let window = PlantDoctorWindow {
            screen: self.screen.clone(),
            events: self.events.clone(),
            path_input: String::new(),
        };

        let result = eframe::run_native("Plant Doctor", options, Box::new(|_cc| Box::new(window)))
            .map_err(|e| e.to_string());

        if let Some(tx) = lock(&self.events).as_ref() {
            let _ = tx.send(DeviceInputEvent::QuitPressed);
        }

        Ok(result?)
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        *lock(&self.screen) = None;
        Ok(())
    }

    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        *lock(&self.screen) = Some(screen.clone());
        Ok(())
    }
}

impl DeviceInput for DeviceDisplayGui {
    fn events(&self) -> std::sync::mpsc::Receiver<DeviceInputEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        *lock(&self.events) = Some(tx);
        rx
    }
}
