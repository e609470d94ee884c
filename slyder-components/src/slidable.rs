//! The rendering surface behind a slyder control.
//!
//! ## Usage
//!
//! Implement [`Slidable`] to give a [`crate::slyder::Slyder`] its look. The
//! control owns the value and the gesture handling; the surface only reports
//! its geometry and draws whatever [`ViewModel`] it is fitted with.

use slyder_ui::{Direction, ReadingDirection, Size};

use crate::slyder::ViewModel;

/// A surface that renders the track and thumb of a slider.
pub trait Slidable {
    /// Direction in which the value grows on this surface.
    fn direction(&self) -> Direction;

    /// Size of the area that receives touches.
    fn bounds_size(&self) -> Size;

    /// Updates the surface to show `view_model`.
    fn fit(&mut self, view_model: &ViewModel);

    /// Informs the surface of the layout's reading direction.
    ///
    /// Surfaces that anchor their fill on a logical edge override this.
    fn set_reading_direction(&mut self, reading_direction: ReadingDirection) {
        let _ = reading_direction;
    }
}

impl<S: Slidable + ?Sized> Slidable for Box<S> {
    fn direction(&self) -> Direction {
        (**self).direction()
    }

    fn bounds_size(&self) -> Size {
        (**self).bounds_size()
    }

    fn fit(&mut self, view_model: &ViewModel) {
        (**self).fit(view_model);
    }

    fn set_reading_direction(&mut self, reading_direction: ReadingDirection) {
        (**self).set_reading_direction(reading_direction);
    }
}
