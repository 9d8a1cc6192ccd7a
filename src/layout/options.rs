//! Grid options as passed from JavaScript
//!
//! Numeric fields accept either numbers or numeric strings (`10`, `"10"`,
//! `"10px"`) and are truncated to whole pixels.

use serde::{Deserialize, Deserializer, Serialize};

/// Item width used when neither `width` nor `max_width` is given
pub const DEFAULT_ITEM_WIDTH: f64 = 220.0;

/// Transition used when the caller gives none
pub const DEFAULT_TRANSITION: &str = "all 0.5s ease";

/// Appended to every transition so size changes snap instead of animating
pub const TRANSITION_SUFFIX: &str = ", height 0, width 0";

/// Per-invocation grid configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GridOptions {
    /// Selector for the grid items inside the container
    #[serde(rename = "srcNode", alias = "src_node")]
    pub src_node: Option<String>,

    /// CSS transition applied to every item
    pub transition: Option<String>,

    /// Gap between adjacent items, split evenly on both sides
    #[serde(deserialize_with = "pixels")]
    pub margin: Option<f64>,

    /// Fixed item width (fixed-width mode)
    #[serde(deserialize_with = "pixels")]
    pub width: Option<f64>,

    /// Upper bound on item width (fit-columns mode)
    #[serde(alias = "maxWidth", deserialize_with = "pixels")]
    pub max_width: Option<f64>,

    /// Re-render on window resize until the container leaves the document
    #[serde(deserialize_with = "truthy")]
    pub resizable: bool,
}

/// How item widths are chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Items keep the given width; leftover row space centers the block
    Fixed { item_width: f64 },
    /// Columns are added until items fit under `max_width`, then stretched
    /// to fill the container exactly
    MaxWidth { max_width: f64 },
}

impl GridOptions {
    pub fn new(src_node: impl Into<String>) -> Self {
        Self {
            src_node: Some(src_node.into()),
            ..Self::default()
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = Some(transition.into());
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Item selector, if one was given and is not blank
    pub fn selector(&self) -> Option<&str> {
        self.src_node
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Margin in whole pixels, never negative
    pub fn margin(&self) -> f64 {
        self.margin.map(whole_pixels).unwrap_or(0.0)
    }

    /// Sizing mode. A zero `max_width` counts as absent, and a zero `width`
    /// falls back to the default.
    pub fn sizing(&self) -> Sizing {
        match self.max_width.map(whole_pixels) {
            Some(max_width) if max_width > 0.0 => Sizing::MaxWidth { max_width },
            _ => {
                let item_width = self
                    .width
                    .map(whole_pixels)
                    .filter(|w| *w > 0.0)
                    .unwrap_or(DEFAULT_ITEM_WIDTH);
                Sizing::Fixed { item_width }
            }
        }
    }

    /// Transition string written on every item
    pub fn transition_value(&self) -> String {
        let base = self
            .transition
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TRANSITION);
        format!("{}{}", base, TRANSITION_SUFFIX)
    }
}

fn whole_pixels(value: f64) -> f64 {
    if value.is_finite() {
        value.trunc().max(0.0)
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PixelValue {
    Number(f64),
    Text(String),
}

/// Accepts `10`, `10.7`, `"10"` and `"10px"`; anything unparseable is absent
fn pixels<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<PixelValue> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(PixelValue::Number(n)) => Some(n),
        Some(PixelValue::Text(text)) => parse_leading_number(&text),
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// JS truthiness: `0`, `NaN`, `""`, `false` and `null` are false, and every
/// other value (including objects and arrays) is true
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<FlagValue> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(FlagValue::Bool(b)) => b,
        Some(FlagValue::Number(n)) => n != 0.0 && !n.is_nan(),
        Some(FlagValue::Text(text)) => !text.is_empty(),
        Some(FlagValue::Other(_)) => true,
        None => false,
    })
}

/// Leading optional sign and digits of `text`, after leading whitespace
fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<i64>().ok().map(|n| n as f64)
}
