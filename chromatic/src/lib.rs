//! Chromatic - conversion between interleaved 8-bit pixel buffers and planar
//! normalized-float images.
//!
//! - [`decode_interleaved`] splits an N-channel byte buffer into N planes.
//! - [`encode_rgba`] packs any [`PlanarImage`] with 3+ channels into RGBA bytes.
//! - [`RgbaImage`] is the four-channel image type whose filters never touch alpha.
//!
//! # Quick Start
//!
//! ```rust
//! use chromatic::prelude::*;
//!
//! let image = decode_interleaved(&[255, 128, 0], 1, 1, 3).unwrap();
//! let rgba = RgbaImage::from_image(&image).unwrap();
//! assert_eq!(rgba.to_rgba_bytes(), vec![255, 128, 0, 255]);
//! ```

mod channel_image;
mod conversion;
mod error;
mod rgba_image;
mod sample;

pub mod prelude;

pub use channel_image::{ChannelFilter, ChannelImage, PlanarImage};
pub use conversion::{
    decode_interleaved, encode_rgba, encode_rgba_into, ChannelLayout, RGBA_BYTES_PER_PIXEL,
};
pub use error::{Error, Result};
pub use rgba_image::{RgbaChannel, RgbaImage};
pub use sample::{ChannelConvert, OpaqueAlpha, NORMALIZE_SCALE};

#[cfg(feature = "bench")]
pub mod bench {
    pub use crate::conversion::bench as conversion;
}
