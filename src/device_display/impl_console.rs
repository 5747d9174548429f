use crate::device_display::interface::{DeviceDisplay, Screen};
use std::error::Error;

const WIDTH: usize = 60;

pub struct DeviceDisplayConsole {
    last_screen: Option<Screen>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_screen: None }
    }

    fn render_display(lines: &[String]) {
        println!("┌{}┐", "─".repeat(WIDTH));
        for line in lines {
            let padding = WIDTH.saturating_sub(line.chars().count());
            println!("│{}{}│", line, " ".repeat(padding));
        }
        println!("└{}┘", "─".repeat(WIDTH));
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();

        if line.is_empty() {
            line = word;
        } else if line.chars().count() + word.chars().count() < width {
            line.push(' ');
            line.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut line, word));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

pub fn screen_lines(screen: &Screen, width: usize) -> Vec<String> {
    let mut lines = vec!["Plant Doctor".to_string(), String::new()];

    if let Some(error) = &screen.error {
        lines.extend(wrap(&format!("Error: {}", error), width));
    }

    match &screen.image_name {
        Some(name) => lines.extend(wrap(&format!("Image: {}", name), width)),
        None => lines.push("No image. Type: open <path>".to_string()),
    }

    if screen.busy {
        lines.push("Analyzing...".to_string());
    } else if screen.can_diagnose {
        lines.push("Ready. Type: diagnose".to_string());
    }

    if let Some(result) = &screen.result {
        lines.push(String::new());
        lines.extend(wrap(&result.title, width));
        lines.push(format!("Confidence: {}%", result.confidence_percent));
        lines.extend(wrap(
            &format!("{}: {}", result.advice.name, result.advice.description),
            width,
        ));
        lines.extend(wrap(&format!("Treatment: {}", result.advice.treatment), width));
        lines.extend(wrap(&format!("Prevention: {}", result.advice.prevention), width));
    }

    lines.push(String::new());
    lines.extend(wrap(&screen.status_line(), width));
    lines
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.last_screen = None;
        Ok(())
    }

    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_screen.as_ref() == Some(screen) {
            return Ok(());
        }
        Self::render_display(&screen_lines(screen, WIDTH));
        self.last_screen = Some(screen.clone());
        Ok(())
    }
}
