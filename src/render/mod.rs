//! Rendering: ray casting, banded shading and frame composition.
//!
//! Re-exports:
//! - `palette`: Fixed 16-colour palette
//! - `framebuffer`: CPU framebuffer of palette entries plus text labels
//! - `casters`: Ray marching with wall-seam detection
//! - `shading`: Depth bands, floor tiers and checkerboard dither
//! - `render3d`: Column renderer, minimap and overlays

pub mod palette;
pub mod framebuffer;
pub mod casters;
pub mod shading;
pub mod render3d;
