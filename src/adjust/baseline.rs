//! Baseline caching for slider adjustments.
//!
//! Brightness and contrast read from a frame cached the first time they are
//! used after a load or reset, so moving a slider back and forth never
//! compounds. Saturation and hue read the live frame every time and do
//! compound.

use serde::Serialize;

use super::apply;
use crate::frame::Frame;
use crate::interpreter::Adjustment;

/// Current slider positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjustmentValues {
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
    pub hue: i32,
}

impl Default for AdjustmentValues {
    fn default() -> Self {
        Self {
            brightness: Adjustment::Brightness.identity(),
            contrast: Adjustment::Contrast.identity(),
            saturation: Adjustment::Saturation.identity(),
            hue: Adjustment::Hue.identity(),
        }
    }
}

impl AdjustmentValues {
    pub fn get(&self, adjustment: Adjustment) -> i32 {
        match adjustment {
            Adjustment::Brightness => self.brightness,
            Adjustment::Contrast => self.contrast,
            Adjustment::Saturation => self.saturation,
            Adjustment::Hue => self.hue,
        }
    }

    fn set(&mut self, adjustment: Adjustment, value: i32) {
        match adjustment {
            Adjustment::Brightness => self.brightness = value,
            Adjustment::Contrast => self.contrast = value,
            Adjustment::Saturation => self.saturation = value,
            Adjustment::Hue => self.hue = value,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Slider values and cached baselines for one session
#[derive(Debug, Clone, Default)]
pub struct AdjustmentState {
    brightness_base: Option<Frame>,
    contrast_base: Option<Frame>,
    values: AdjustmentValues,
}

impl AdjustmentState {
    /// Compute the frame for `adjustment` at `value`
    ///
    /// `current` is the live frame. It seeds the brightness/contrast baseline
    /// when none is cached yet, and is the direct input for saturation/hue.
    pub fn apply(&mut self, adjustment: Adjustment, value: i32, current: &Frame) -> Frame {
        let value = adjustment.clamp(value as i64);
        self.values.set(adjustment, value);

        let input = match adjustment {
            Adjustment::Brightness => &*self.brightness_base.get_or_insert_with(|| current.clone()),
            Adjustment::Contrast => &*self.contrast_base.get_or_insert_with(|| current.clone()),
            Adjustment::Saturation | Adjustment::Hue => current,
        };
        apply(adjustment, input, value)
    }

    /// Return every slider to identity and drop the baselines
    ///
    /// Sliders that were away from identity are re-applied at identity, in
    /// brightness, contrast, saturation, hue order, starting from `current`.
    /// Returns the resulting frame, or `None` when nothing had to be re-applied.
    pub fn reset(&mut self, current: &Frame) -> Option<Frame> {
        let mut frame: Option<Frame> = None;

        for adjustment in Adjustment::PRIORITY {
            if self.values.get(adjustment) == adjustment.identity() {
                continue;
            }
            let next = self.apply(adjustment, adjustment.identity(), frame.as_ref().unwrap_or(current));
            frame = Some(next);
        }

        self.clear();
        frame
    }

    /// Forget baselines and slider positions (new image loaded)
    pub fn clear(&mut self) {
        self.brightness_base = None;
        self.contrast_base = None;
        self.values = AdjustmentValues::default();
    }

    pub fn values(&self) -> AdjustmentValues {
        self.values
    }

    /// Whether `adjustment` currently computes from a cached baseline
    pub fn has_baseline(&self, adjustment: Adjustment) -> bool {
        match adjustment {
            Adjustment::Brightness => self.brightness_base.is_some(),
            Adjustment::Contrast => self.contrast_base.is_some(),
            Adjustment::Saturation | Adjustment::Hue => false,
        }
    }
}
