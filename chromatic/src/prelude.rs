// Image types
pub use crate::{ChannelImage, PlanarImage, RgbaChannel, RgbaImage};

// Conversion
pub use crate::{decode_interleaved, encode_rgba, encode_rgba_into, ChannelLayout};

// Filtering
pub use crate::ChannelFilter;

// Error handling
pub use crate::{Error, Result};
