//! CSS shadow values

use std::fmt::{Display, Formatter};

use castpage_core::format::format_number;

/// One `box-shadow` / `text-shadow` entry
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    /// Only written when non-zero (text shadows have no spread)
    pub spread: f64,
    pub color: String,
}

impl Shadow {
    pub fn new(offset_x: f64, offset_y: f64, blur: f64, color: impl Into<String>) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread: 0.0,
            color: color.into(),
        }
    }

    /// Hard shadow with no blur
    pub fn offset(offset_x: f64, offset_y: f64, color: impl Into<String>) -> Self {
        Self::new(offset_x, offset_y, 0.0, color)
    }

    /// Centered shadow, used for glows
    pub fn glow(blur: f64, color: impl Into<String>) -> Self {
        Self::new(0.0, 0.0, blur, color)
    }

    pub fn spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }
}

fn length(value: f64) -> String {
    let formatted = format_number(value);
    if formatted == "0" {
        formatted
    } else {
        format!("{formatted}px")
    }
}

impl Display for Shadow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            length(self.offset_x),
            length(self.offset_y),
            length(self.blur)
        )?;
        if length(self.spread) != "0" {
            write!(f, " {}", length(self.spread))?;
        }
        write!(f, " {}", self.color)
    }
}

/// Join shadows into one CSS value; an empty list is `none`
pub fn shadow_list(shadows: &[Shadow]) -> String {
    if shadows.is_empty() {
        return "none".to_string();
    }
    shadows
        .iter()
        .map(Shadow::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
