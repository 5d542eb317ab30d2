use serde::{Deserialize, Serialize};

use crate::error::{TickError, TickResult};
use crate::render::{LinePrimitive, TextPrimitive};

/// Backend-agnostic output of one tick draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickFrame {
    pub width: f64,
    pub height: f64,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl TickFrame {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.texts.clear();
    }

    pub fn validate(&self) -> TickResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(TickError::InvalidData(format!(
                "frame size must be finite and > 0: width={}, height={}",
                self.width, self.height
            )));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
