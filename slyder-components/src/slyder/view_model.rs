use slyder_ui::error::{Result, SlyderError, ensure_finite};

/// Clamps `value` into `[minimum, maximum]`.
///
/// Unlike [`f64::clamp`] this never panics; callers are expected to have
/// validated `minimum <= maximum` (see [`ViewModel::new`]).
pub fn clamp(value: f64, minimum: f64, maximum: f64) -> f64 {
    if value > maximum {
        return maximum;
    }
    if value < minimum {
        return minimum;
    }
    value
}

/// The value state of a slyder control.
///
/// `minimum_value <= value <= maximum_value` holds after every mutation made
/// through this type; out-of-range values are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewModel {
    /// Lower bound of the value.
    pub minimum_value: f64,
    /// Upper bound of the value.
    pub maximum_value: f64,
    /// The current value.
    pub value: f64,
    /// Whether a finger is currently on the control.
    pub interacting: bool,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 1.0,
            value: 0.0,
            interacting: false,
        }
    }
}

impl ViewModel {
    /// Creates a view model, clamping `value` into the range.
    ///
    /// Fails when a bound is not finite or when `minimum > maximum`.
    pub fn new(minimum: f64, maximum: f64, value: f64) -> Result<Self> {
        let (minimum, maximum) = validate_range(minimum, maximum)?;
        let value = ensure_finite("value", value)?;
        Ok(Self {
            minimum_value: minimum,
            maximum_value: maximum,
            value: clamp(value, minimum, maximum),
            interacting: false,
        })
    }

    /// Returns a copy with `value` clamped into the current range.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = self.clamp(value);
        self
    }

    /// Returns a copy with new bounds; the value is re-clamped.
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Result<Self> {
        let (minimum, maximum) = validate_range(minimum, maximum)?;
        self.minimum_value = minimum;
        self.maximum_value = maximum;
        self.value = clamp(self.value, minimum, maximum);
        Ok(self)
    }

    /// Returns a copy with the interaction flag replaced.
    pub fn with_interacting(mut self, interacting: bool) -> Self {
        self.interacting = interacting;
        self
    }

    /// Clamps `value` into this model's range.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.minimum_value, self.maximum_value)
    }

    /// `maximum - minimum`.
    pub fn span(&self) -> f64 {
        self.maximum_value - self.minimum_value
    }
}

fn validate_range(minimum: f64, maximum: f64) -> Result<(f64, f64)> {
    let minimum = ensure_finite("minimum", minimum)?;
    let maximum = ensure_finite("maximum", maximum)?;
    if minimum > maximum {
        return Err(SlyderError::InvalidRange { minimum, maximum });
    }
    Ok((minimum, maximum))
}

/// How a position ratio on the track becomes a value, and back.
///
/// [`LocationMapping::Legacy`] multiplies the ratio by `maximum + minimum`.
/// That agrees with the conventional interpolation only when the minimum is
/// zero; for any other range a touch at the start of the track does not land
/// on the minimum. It stays the default so existing controls keep their
/// behavior. [`LocationMapping::Interpolated`] is the conventional
/// `minimum + ratio * (maximum - minimum)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationMapping {
    /// `value = (maximum + minimum) * ratio`.
    #[default]
    Legacy,
    /// `value = minimum + ratio * (maximum - minimum)`.
    Interpolated,
}

impl LocationMapping {
    /// Maps a track ratio to an unclamped value.
    pub fn value_for_ratio(self, ratio: f64, model: &ViewModel) -> f64 {
        match self {
            LocationMapping::Legacy => (model.maximum_value + model.minimum_value) * ratio,
            LocationMapping::Interpolated => model.minimum_value + ratio * model.span(),
        }
    }

    /// Maps the model's value back to a track ratio.
    ///
    /// Returns `0.0` when the divisor of the mapping is zero.
    pub fn ratio_for_value(self, model: &ViewModel) -> f64 {
        let (numerator, denominator) = match self {
            LocationMapping::Legacy => (model.value, model.maximum_value + model.minimum_value),
            LocationMapping::Interpolated => (model.value - model.minimum_value, model.span()),
        };
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }
}
