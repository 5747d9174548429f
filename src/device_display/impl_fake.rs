use crate::device_display::interface::{DeviceDisplay, Screen};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    screens: Arc<Mutex<Vec<Screen>>>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            screens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every screen shown so far, oldest first.
    pub fn screens(&self) -> Arc<Mutex<Vec<Screen>>> {
        self.screens.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show({:?})", screen))?;
        self.screens
            .lock()
            .map_err(|e| e.to_string())?
            .push(screen.clone());
        Ok(())
    }
}
