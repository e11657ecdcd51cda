//! Placement of operators on a single baseline and right-angle connector arcs.

/// Connector arcs: routing, levels, and painting.
pub mod connector;
/// Color assignment for connector arcs.
pub mod palette;
/// Horizontal placement of operators.
pub mod placement;

pub use connector::{Connector, paint_connector, route_connections};
pub use palette::Palette;
pub use placement::{Placement, layout};
