use crate::device_input::interface::{DeviceInput, DeviceInputEvent};
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

pub struct DeviceInputStdin {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceInputStdin {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("input").with_namespace("stdin"),
        }
    }
}

/// `open <path>` or a bare path selects an image.
pub fn parse_command(line: &str) -> Option<DeviceInputEvent> {
    let line = line.trim();
    match line {
        "" | "open" => None,
        "diagnose" | "d" => Some(DeviceInputEvent::DiagnosePressed),
        "reset" | "r" => Some(DeviceInputEvent::ResetPressed),
        "quit" | "q" | "exit" => Some(DeviceInputEvent::QuitPressed),
        _ => {
            let path = line.strip_prefix("open ").unwrap_or(line).trim();
            if path.is_empty() {
                None
            } else {
                Some(DeviceInputEvent::ImageChosen(PathBuf::from(path)))
            }
        }
    }
}

impl DeviceInput for DeviceInputStdin {
    fn events(&self) -> std::sync::mpsc::Receiver<DeviceInputEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let _ = logger.info("Commands: open <path> | diagnose | reset | quit");
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        let _ = logger.error(&format!("Failed to read stdin: {}", e));
                        break;
                    }
                };
                if let Some(event) = parse_command(&line) {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
            }
            let _ = tx.send(DeviceInputEvent::QuitPressed);
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("diagnose"), Some(DeviceInputEvent::DiagnosePressed));
        assert_eq!(parse_command("  reset \n"), Some(DeviceInputEvent::ResetPressed));
        assert_eq!(parse_command("q"), Some(DeviceInputEvent::QuitPressed));
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("open "), None);
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(
            parse_command("open leaves/tomato 1.jpg"),
            Some(DeviceInputEvent::ImageChosen(PathBuf::from("leaves/tomato 1.jpg")))
        );
        assert_eq!(
            parse_command("/tmp/leaf.png"),
            Some(DeviceInputEvent::ImageChosen(PathBuf::from("/tmp/leaf.png")))
        );
    }
}
