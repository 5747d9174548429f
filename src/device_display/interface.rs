use crate::advice::AdviceRecord;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelStatus {
    Initializing,
    Online,
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenResult {
    pub title: String,
    /// 0..=1, for progress bars.
    pub confidence: f32,
    pub confidence_percent: String,
    pub advice: &'static AdviceRecord,
}

/// Everything a display needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub status: ModelStatus,
    pub image_name: Option<String>,
    pub busy: bool,
    pub can_diagnose: bool,
    pub error: Option<String>,
    pub result: Option<ScreenResult>,
}

impl Screen {
    pub fn status_line(&self) -> String {
        match &self.status {
            ModelStatus::Initializing => "Initializing model...".to_string(),
            ModelStatus::Online => "System online".to_string(),
            ModelStatus::Unavailable(cause) => format!("Model unavailable: {}", cause),
        }
    }
}

pub trait DeviceDisplay: Send + Sync {
    /// Prepare the output surface
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replace the current frame with `screen`
    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>>;
}
