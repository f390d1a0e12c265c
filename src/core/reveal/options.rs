//! Reveal configuration: visibility threshold, root margin and stagger step
//!
//! The root margin follows the CSS shorthand accepted by `IntersectionObserver`
//! (`"10px"`, `"0px 20px"`, `"0px 0px -50px 0px"`, percentages allowed).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default fraction of an element that must be visible before it reveals
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Default root margin: trigger slightly before the element reaches the bottom edge
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Default stagger step (no stagger)
pub const DEFAULT_STAGGER_STEP_MS: u32 = 0;

/// Errors produced while building reveal options from configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevealError {
    #[error("visibility threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error("root margin cannot be empty")]
    EmptyRootMargin,

    #[error("root margin accepts at most 4 components, got {0}")]
    TooManyMarginComponents(usize),

    #[error("invalid root margin value '{0}': expected pixels or a percentage")]
    InvalidMarginValue(String),
}

/// A single root margin component
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl MarginValue {
    pub const ZERO: MarginValue = MarginValue::Px(0.0);
}

impl FromStr for MarginValue {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RevealError::InvalidMarginValue(s.to_string());

        let (number, build): (&str, fn(f64) -> MarginValue) = if let Some(n) = s.strip_suffix("px")
        {
            (n, MarginValue::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, MarginValue::Percent)
        } else if s == "0" {
            // unitless zero is valid CSS
            return Ok(MarginValue::ZERO);
        } else {
            return Err(invalid());
        };

        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(build(value))
    }
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds negative zero into zero
        match *self {
            MarginValue::Px(v) => write!(f, "{}px", v + 0.0),
            MarginValue::Percent(v) => write!(f, "{}%", v + 0.0),
        }
    }
}

/// Offsets applied to the viewport rectangle before testing visibility
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl RootMargin {
    /// No margin: the literal viewport edge
    pub const NONE: RootMargin = RootMargin {
        top: MarginValue::ZERO,
        right: MarginValue::ZERO,
        bottom: MarginValue::ZERO,
        left: MarginValue::ZERO,
    };

    /// Shrink (negative) or grow (positive) only the bottom edge, in pixels
    pub fn bottom_px(px: f64) -> Self {
        Self {
            bottom: MarginValue::Px(px),
            ..Self::NONE
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::bottom_px(-50.0)
    }
}

impl FromStr for RootMargin {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(MarginValue::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        // CSS shorthand expansion
        let (top, right, bottom, left) = match values.as_slice() {
            [] => return Err(RevealError::EmptyRootMargin),
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            more => return Err(RevealError::TooManyMarginComponents(more.len())),
        };

        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Options accepted by [`RevealTrigger::register`](super::RevealTrigger::register)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealOptions {
    /// Fraction (0.0..=1.0) of the element area that must be visible
    pub visibility_threshold: f64,
    /// Bias applied to the viewport test area
    pub root_margin: RootMargin,
    /// Delay added per sibling index, in milliseconds
    pub stagger_step_ms: u32,
}

impl RevealOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visibility threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    /// Set the root margin
    pub fn root_margin(mut self, margin: RootMargin) -> Self {
        self.root_margin = margin;
        self
    }

    /// Set the stagger step
    pub fn stagger_step_ms(mut self, step: u32) -> Self {
        self.stagger_step_ms = step;
        self
    }

    /// Check that the options describe a usable observer configuration
    pub fn validate(&self) -> Result<(), RevealError> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(RevealError::InvalidThreshold(self.visibility_threshold));
        }
        Ok(())
    }

    /// Delay for the element at `index` among its siblings
    pub fn delay_for(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.stagger_step_ms)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            root_margin: RootMargin::default(),
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margin_matches_constant() {
        let parsed: RootMargin = DEFAULT_ROOT_MARGIN.parse().unwrap();
        assert_eq!(parsed, RootMargin::default());
        assert_eq!(RootMargin::default().to_string(), DEFAULT_ROOT_MARGIN);
    }

    #[test]
    fn test_margin_shorthand_expansion() {
        let one: RootMargin = "10px".parse().unwrap();
        assert_eq!(one.to_string(), "10px 10px 10px 10px");

        let two: RootMargin = "5px 10%".parse().unwrap();
        assert_eq!(two.top, MarginValue::Px(5.0));
        assert_eq!(two.right, MarginValue::Percent(10.0));
        assert_eq!(two.bottom, MarginValue::Px(5.0));
        assert_eq!(two.left, MarginValue::Percent(10.0));

        let three: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(three.to_string(), "1px 2px 3px 2px");
    }

    #[test]
    fn test_margin_unitless_zero() {
        let margin: RootMargin = "0 0 -100px 0".parse().unwrap();
        assert_eq!(margin, RootMargin::bottom_px(-100.0));
    }

    #[test]
    fn test_margin_errors() {
        assert_eq!("".parse::<RootMargin>(), Err(RevealError::EmptyRootMargin));
        assert_eq!(
            "1px 2px 3px 4px 5px".parse::<RootMargin>(),
            Err(RevealError::TooManyMarginComponents(5))
        );
        assert_eq!(
            "10em".parse::<RootMargin>(),
            Err(RevealError::InvalidMarginValue("10em".to_string()))
        );
        assert!("abcpx".parse::<RootMargin>().is_err());
        assert!("NaNpx".parse::<RootMargin>().is_err());
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let margin: RootMargin = "-0px".parse().unwrap();
        assert_eq!(margin.to_string(), "0px 0px 0px 0px");
    }

    #[test]
    fn test_threshold_validation() {
        assert!(RevealOptions::new().validate().is_ok());
        assert!(RevealOptions::new().threshold(1.0).validate().is_ok());
        assert_eq!(
            RevealOptions::new().threshold(1.5).validate(),
            Err(RevealError::InvalidThreshold(1.5))
        );
        assert!(RevealOptions::new().threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_delay_for_index() {
        let options = RevealOptions::new().stagger_step_ms(100);
        assert_eq!(options.delay_for(0), 0);
        assert_eq!(options.delay_for(3), 300);
        assert_eq!(options.delay_for(usize::MAX), u32::MAX);
        assert_eq!(RevealOptions::new().delay_for(7), 0);
    }

    #[test]
    fn test_options_from_json() {
        let options: RevealOptions = serde_json::from_value(serde_json::json!({
            "visibilityThreshold": 0.15,
            "rootMargin": "0px 0px -100px 0px",
            "staggerStepMs": 100
        }))
        .unwrap();

        assert_eq!(options.visibility_threshold, 0.15);
        assert_eq!(options.root_margin, RootMargin::bottom_px(-100.0));
        assert_eq!(options.stagger_step_ms, 100);
    }

    #[test]
    fn test_options_json_defaults_and_bad_margin() {
        let options: RevealOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RevealOptions::default());

        let bad = serde_json::from_str::<RevealOptions>(r#"{"rootMargin": "1vh"}"#);
        assert!(bad.is_err());
    }
}
