//! Camera, windowing and the render boundary.
mod camera;
mod render;
mod viewport;

pub use camera::Camera;
pub use render::{RenderView, VisibleTile, tile_index};
pub use viewport::{Frame, ViewportSize, axis_offset};
