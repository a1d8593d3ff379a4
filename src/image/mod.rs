//! Image containers used by the pipeline.
//!
//! - [`RasterImage`]: decoded input buffer (gray, RGB or RGBA, channel-last).
//! - [`GrayImageU8`]: owned single-channel 8-bit buffer.
//! - [`ImageU8`]: borrowed, strided 8-bit view; cropping is a view operation.
//! - [`ImageF32`]: owned float buffer for intermediate filter passes.
pub mod f32;
pub mod gray;
pub mod io;
pub mod raster;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::gray::GrayImageU8;
pub use self::raster::RasterImage;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
