/// In-place `+= 1` accumulation.
///
/// Inserting a key that is already present does not replace its value,
/// it increments it, so maps built with [`AvlTreeMap::insert`] count occurrences.
///
/// [`AvlTreeMap::insert`]: crate::AvlTreeMap::insert
pub trait Increment {
    fn increment(&mut self);
}

macro_rules! impl_increment_int {
    ($($ty:ty),*) => {
        $(
            impl Increment for $ty {
                #[inline]
                fn increment(&mut self) {
                    *self += 1;
                }
            }
        )*
    };
}

macro_rules! impl_increment_float {
    ($($ty:ty),*) => {
        $(
            impl Increment for $ty {
                #[inline]
                fn increment(&mut self) {
                    *self += 1.0;
                }
            }
        )*
    };
}

impl_increment_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_increment_float!(f32, f64);
