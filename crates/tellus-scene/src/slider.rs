//! The age slider: the UI boundary where raw input becomes a valid age.

use tellus_config::TimelineConfig;

use crate::SliderError;

/// Integer age control over `[min, max]` in steps of `step` Ma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeSlider {
    min: u32,
    max: u32,
    step: u32,
    value: u32,
}

impl AgeSlider {
    /// Build a slider from config. The initial age is snapped into range.
    pub fn new(config: &TimelineConfig) -> Result<Self, SliderError> {
        if config.min_age_ma > config.max_age_ma {
            return Err(SliderError::EmptyRange {
                min: config.min_age_ma,
                max: config.max_age_ma,
            });
        }
        if config.step_ma == 0 {
            return Err(SliderError::ZeroStep);
        }
        let mut slider = Self {
            min: config.min_age_ma,
            max: config.max_age_ma,
            step: config.step_ma,
            value: config.min_age_ma,
        };
        slider.set_value(config.initial_age_ma);
        Ok(slider)
    }

    /// Current age in Ma.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Youngest selectable age.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Oldest selectable age.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Slider increment.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Move to `age`, clamped into range and snapped to the nearest step.
    /// Returns the accepted value.
    pub fn set_value(&mut self, age: u32) -> u32 {
        self.value = self.snap(i64::from(age));
        self.value
    }

    /// Move to the age in a text field.
    ///
    /// Reads a leading integer the way browsers read range input values
    /// (`"120"`, `" 95 Ma"`, `"-3"`), then clamps and snaps it. Input without a
    /// leading integer is rejected and the slider keeps its value.
    pub fn set_from_input(&mut self, input: &str) -> Result<u32, SliderError> {
        let raw = parse_leading_integer(input)
            .ok_or_else(|| SliderError::NotANumber(input.to_string()))?;
        self.value = self.snap(raw);
        Ok(self.value)
    }

    /// Text for the age label next to the slider.
    pub fn label(&self) -> String {
        format!("{} Ma before present", self.value)
    }

    /// Every selectable age from `min` to `max`.
    pub fn ages(&self) -> impl Iterator<Item = u32> + use<> {
        (self.min..=self.max).step_by(self.step as usize)
    }

    fn snap(&self, raw: i64) -> u32 {
        let min = i64::from(self.min);
        let max = i64::from(self.max);
        let step = i64::from(self.step);
        let clamped = raw.clamp(min, max);
        let steps = (clamped - min + step / 2) / step;
        let snapped = (min + steps * step).min(max);
        // Clamped into [min, max], both of which are u32.
        snapped as u32
    }
}

/// Parse an optionally signed integer prefix, ignoring leading whitespace.
///
/// Returns `None` when no digit follows the sign. Magnitudes that overflow
/// `i64` saturate.
pub fn parse_leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
