pub trait FloatExt: Sized {
    fn approximately_eq(self, other: Self) -> bool;

    /// True when `self` and `other` differ by at most `tolerance`.
    fn within(self, other: Self, tolerance: Self) -> bool;
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < crate::EPSILON as f32
    }

    fn within(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < crate::EPSILON
    }

    fn within(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance
    }
}
