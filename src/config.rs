use crate::model_host::model_config::ModelConfig;
use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayKind {
    #[default]
    Gui,
    Console,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub logger_timezone: chrono::FixedOffset,
    pub display: DisplayKind,
    pub initial_image: Option<PathBuf>,
    pub fake_model: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            logger_timezone: local_offset(),
            display: DisplayKind::Gui,
            initial_image: None,
            fake_model: false,
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
