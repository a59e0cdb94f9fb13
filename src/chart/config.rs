use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 30.0,
            bottom: 60.0,
            left: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartColors {
    pub bar: String,
    pub point: String,
    pub highlight: String,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            bar: "steelblue".to_string(),
            point: "steelblue".to_string(),
            highlight: "orange".to_string(),
        }
    }
}

/// Plot area size plus the margins around it. The SVG is
/// `width + left + right` by `height + top + bottom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub colors: ChartColors,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: Margin::default(),
            colors: ChartColors::default(),
        }
    }
}

impl ChartConfig {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }
}
