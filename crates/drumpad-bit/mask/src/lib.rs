mod bitmask;

pub use bitmask::{Bitmask, Iter};

/// A fieldless enum that can be stored in a [`Bitmask`].
///
/// Usually implemented through `#[derive(Bit)]` from `drumpad-bit-derive`,
/// which assigns bits by declaration order.
pub trait Bitable: Copy {
    fn bit(&self) -> u64;
    fn index(&self) -> u32;
    /// Inverse of [`Bitable::index`]. Returns `None` for indices with no variant.
    fn from_index(index: u32) -> Option<Self>;
}
