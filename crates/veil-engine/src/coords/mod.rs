//! Coordinate and geometry types shared by the input layer and UI contexts.
//!
//! Overlay space:
//! - Scaled screen units reported by the host
//! - Origin top-left
//! - +X right, +Y down
//!
//! World space is whatever the host's renderer uses; the UI layer only carries
//! placements through to it.

mod rect;
mod vec2;
mod vec3;

pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
