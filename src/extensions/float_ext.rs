/// A trait to map a fraction onto a single color channel.
pub trait ColorLevel {
    /// Returns the channel level in `0..=255` by treating `self` as a fraction in `[0, 1]`.
    /// Values outside of that range saturate, NaN maps to 0.
    fn to_color_level(self) -> u8;
}

macro_rules! impl_color_level {
    ($($t:ty)*) => ($(
        impl ColorLevel for $t {
            fn to_color_level(self) -> u8 {
                (self.clamp(0.0, 1.0) * 255.0).round() as u8
            }
        }
    )*)
}

impl_color_level! { f32 f64 }
