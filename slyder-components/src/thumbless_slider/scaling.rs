/// Scale factors applied to the track while the user is touching it.
///
/// `on_axis` scales the dimension along the track direction, `against_axis`
/// the perpendicular one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRatio {
    /// Factor along the track.
    pub on_axis: f64,
    /// Factor across the track.
    pub against_axis: f64,
}

impl ScaleRatio {
    /// No scaling in either dimension.
    pub const IDENTITY: Self = Self {
        on_axis: 1.0,
        against_axis: 1.0,
    };

    /// Creates a scale ratio from both factors.
    pub const fn new(on_axis: f64, against_axis: f64) -> Self {
        Self {
            on_axis,
            against_axis,
        }
    }
}

impl Default for ScaleRatio {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Shorthand for the common [`ScaleRatio`] shapes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Scaling {
    /// Keep the track size while touched.
    #[default]
    None,
    /// Grow or shrink only along the track.
    OnAxis(f64),
    /// Grow or shrink only across the track.
    AgainstAxis(f64),
    /// Scale both dimensions.
    Both {
        /// Factor along the track.
        on_axis: f64,
        /// Factor across the track.
        against_axis: f64,
    },
}

impl From<Scaling> for ScaleRatio {
    fn from(scaling: Scaling) -> Self {
        match scaling {
            Scaling::None => ScaleRatio::IDENTITY,
            Scaling::OnAxis(ratio) => ScaleRatio::new(ratio, 1.0),
            Scaling::AgainstAxis(ratio) => ScaleRatio::new(1.0, ratio),
            Scaling::Both {
                on_axis,
                against_axis,
            } => ScaleRatio::new(on_axis, against_axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_shorthands() {
        assert_eq!(ScaleRatio::from(Scaling::None), ScaleRatio::IDENTITY);
        assert_eq!(ScaleRatio::from(Scaling::OnAxis(1.2)), ScaleRatio::new(1.2, 1.0));
        assert_eq!(
            ScaleRatio::from(Scaling::AgainstAxis(1.5)),
            ScaleRatio::new(1.0, 1.5)
        );
        assert_eq!(
            ScaleRatio::from(Scaling::Both {
                on_axis: 1.1,
                against_axis: 2.0
            }),
            ScaleRatio::new(1.1, 2.0)
        );
    }
}
