#![forbid(unsafe_code)]

//! Widgets for Orbit.

mod bubble;

pub mod breadcrumb_bar;
pub mod description;
pub mod navigator;

pub use breadcrumb_bar::BreadcrumbBar;
pub use description::DescriptionPanel;
pub use navigator::{NavResult, Navigator, NavigatorState};

use orbit_core::geometry::Rect;
use orbit_render::Frame;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`, and may
/// register hit regions when the frame has a hit grid.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}
