use crate::device_input::interface::{DeviceInput, DeviceInputEvent};
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

enum Source {
    Script(Vec<DeviceInputEvent>),
    Remote(Mutex<Option<Receiver<DeviceInputEvent>>>),
}

/// Replays a fixed script of events, or forwards events sent by the caller.
pub struct DeviceInputFake {
    logger: Arc<dyn Logger + Send + Sync>,
    source: Source,
}

impl DeviceInputFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, script: Vec<DeviceInputEvent>) -> Self {
        Self {
            logger: logger.with_namespace("input").with_namespace("fake"),
            source: Source::Script(script),
        }
    }

    /// Events come from the returned sender. Only the first subscriber
    /// receives them.
    pub fn remote(logger: Arc<dyn Logger + Send + Sync>) -> (Self, Sender<DeviceInputEvent>) {
        let (tx, rx) = channel();
        let input = Self {
            logger: logger.with_namespace("input").with_namespace("fake"),
            source: Source::Remote(Mutex::new(Some(rx))),
        };
        (input, tx)
    }
}

impl DeviceInput for DeviceInputFake {
    fn events(&self) -> Receiver<DeviceInputEvent> {
        match &self.source {
            Source::Script(script) => {
                let (tx, rx) = channel();
                let script = script.clone();
                let logger = self.logger.clone();

                std::thread::spawn(move || {
                    for event in script {
                        let _ = logger.info(&format!("Emitting {:?}", event));
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                });

                rx
            }
            Source::Remote(receiver) => {
                let taken = receiver
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .take();
                match taken {
                    Some(rx) => rx,
                    None => {
                        let _ = self.logger.error("Remote input already subscribed");
                        // Sender dropped at once, so the subscriber sees a closed channel.
                        channel().1
                    }
                }
            }
        }
    }
}
