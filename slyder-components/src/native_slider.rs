//! A surface that mirrors the control's state into a platform slider.
//!
//! ## Usage
//!
//! Use when the host already has a stock slider widget and only needs the
//! slyder gesture handling in front of it. The surface stores the values the
//! way a stock slider does (single precision, no scaling while touched) and
//! the host copies them into its widget.

use slyder_ui::{Direction, Size};

use crate::{slidable::Slidable, slyder::ViewModel};

/// Native-control style rendering surface.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NativeSlider {
    bounds_size: Size,
    minimum_value: f32,
    maximum_value: f32,
    value: f32,
}

impl NativeSlider {
    /// Creates a surface with the given touch area.
    pub fn new(bounds_size: Size) -> Self {
        Self {
            bounds_size,
            ..Self::default()
        }
    }

    /// Resizes the touch area, e.g. after a layout pass.
    pub fn set_bounds_size(&mut self, bounds_size: Size) {
        self.bounds_size = bounds_size;
    }

    /// Lower bound last fitted.
    pub fn minimum_value(&self) -> f32 {
        self.minimum_value
    }

    /// Upper bound last fitted.
    pub fn maximum_value(&self) -> f32 {
        self.maximum_value
    }

    /// Value last fitted.
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl Slidable for NativeSlider {
    fn direction(&self) -> Direction {
        Direction::LeadingToTrailing
    }

    fn bounds_size(&self) -> Size {
        self.bounds_size
    }

    fn fit(&mut self, view_model: &ViewModel) {
        self.maximum_value = view_model.maximum_value as f32;
        self.minimum_value = view_model.minimum_value as f32;
        self.value = view_model.value as f32;
    }
}
