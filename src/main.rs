use argh::FromArgs;
use config::{Config, DisplayKind};
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_input::impl_stdin::DeviceInputStdin;
use device_input::interface::DeviceInput;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use model_host::handle::ModelHandle;
use model_host::impl_fake::{ModelHostFake, ModelLoaderFake};
use model_host::impl_tract_onnx::ModelLoaderTractOnnx;
use model_host::interface::ModelLoader;
use plant_doctor::main::PlantDoctor;
use plant_doctor::render::Render;
use plant_doctor::run_effect::RunEffect;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

mod advice;
mod config;
mod device_display;
mod device_input;
mod error;
mod inference;
mod label;
mod leaf_image;
mod library;
mod model_host;
mod plant_doctor;

#[derive(FromArgs)]
/// Diagnose plant leaf diseases from photos
struct Args {
    /// path to the ONNX classifier
    #[argh(option, short = 'm')]
    model: Option<PathBuf>,

    /// leaf photo to load on startup
    #[argh(option, short = 'i')]
    image: Option<PathBuf>,

    /// use the terminal instead of a window
    #[argh(switch, short = 'c')]
    console: bool,

    /// serve random predictions instead of loading a model
    #[argh(switch)]
    fake_model: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mut config = Config::default();
        if let Some(model_path) = args.model {
            config.model.model_path = model_path;
        }
        config.initial_image = args.image;
        config.display = if args.console {
            DisplayKind::Console
        } else {
            DisplayKind::Gui
        };
        config.fake_model = args.fake_model;
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Args = argh::from_env();
    let config = Config::from(args);

    advice::verify_complete()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let model_loader: Arc<dyn ModelLoader> = if config.fake_model {
        let _ = logger.info("Using fake model");
        Arc::new(ModelLoaderFake::succeeding(Arc::new(
            ModelHostFake::random().with_config(config.model.clone()),
        )))
    } else {
        Arc::new(ModelLoaderTractOnnx)
    };

    match config.display {
        DisplayKind::Console => {
            let device_input: Arc<dyn DeviceInput + Send + Sync> =
                Arc::new(DeviceInputStdin::new(logger.clone()));
            let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
                Arc::new(Mutex::new(DeviceDisplayConsole::new()));

            let plant_doctor = build(&config, &logger, model_loader, device_input, device_display)?;
            plant_doctor.run()?;
        }
        DisplayKind::Gui => {
            let gui = DeviceDisplayGui::new();
            let device_input: Arc<dyn DeviceInput + Send + Sync> = Arc::new(gui.clone());
            let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
                Arc::new(Mutex::new(gui.clone()));

            let plant_doctor = build(&config, &logger, model_loader, device_input, device_display)?;
            let worker = std::thread::spawn(move || plant_doctor.run().map(|_| ()));

            // The window owns the main thread until it closes.
            gui.run_window()?;

            worker
                .join()
                .map_err(|_| "plant doctor worker panicked")??;
        }
    }

    Ok(())
}

fn build(
    config: &Config,
    logger: &Arc<dyn Logger + Send + Sync>,
    model_loader: Arc<dyn ModelLoader>,
    device_input: Arc<dyn DeviceInput + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
) -> Result<PlantDoctor, Box<dyn std::error::Error + Send + Sync>> {
    device_display.lock().map_err(|e| e.to_string())?.init()?;

    let run_effect = RunEffect::new(
        config.clone(),
        logger.clone(),
        model_loader,
        ModelHandle::new(),
        device_input,
    );
    let render = Render::new(device_display);

    Ok(PlantDoctor::new(
        config.clone(),
        logger.clone(),
        run_effect,
        render,
    ))
}
