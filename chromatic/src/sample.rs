// =============================================================================
// Scalar sample conversion between 8-bit bytes and normalized floats
// =============================================================================

/// Byte-to-sample scale, computed as an exact division.
pub const NORMALIZE_SCALE: f32 = 1.0 / 255.0;

pub trait ChannelConvert<To>: Copy {
    fn convert(self) -> To;
}

/// Value of a fully opaque alpha sample for a channel type.
/// For integers this is max value (255), for floats it's 1.0.
pub trait OpaqueAlpha: Copy {
    fn opaque_alpha() -> Self;
}

macro_rules! impl_convert_identity {
    ($($t:ty),+) => {
        $(
            impl ChannelConvert<$t> for $t {
                #[inline]
                fn convert(self) -> $t { self }
            }
        )+
    };
}

impl_convert_identity!(u8, f32);

// Integer to float: pure scale, no quantization
macro_rules! impl_convert_int_to_float {
    ($int:ty, $float:ty) => {
        impl ChannelConvert<$float> for $int {
            #[inline]
            fn convert(self) -> $float {
                self as $float / <$int>::MAX as $float
            }
        }
    };
}

// Float to integer: round to nearest (half away from zero), then clamp.
// Truncation would bias every sample just below an integer boundary downwards.
macro_rules! impl_convert_float_to_int {
    ($float:ty, $int:ty) => {
        impl ChannelConvert<$int> for $float {
            #[inline]
            fn convert(self) -> $int {
                let scaled = (self * <$int>::MAX as $float).round();
                if scaled.is_nan() {
                    return 0;
                }
                scaled.clamp(0.0, <$int>::MAX as $float) as $int
            }
        }
    };
}

impl_convert_int_to_float!(u8, f32);
impl_convert_float_to_int!(f32, u8);

impl OpaqueAlpha for u8 {
    #[inline]
    fn opaque_alpha() -> Self {
        255
    }
}

impl OpaqueAlpha for f32 {
    #[inline]
    fn opaque_alpha() -> Self {
        1.0
    }
}
