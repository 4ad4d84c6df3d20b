mod derive;

use proc_macro::TokenStream;

use crate::derive::handle_derive_bit;

/// Derives `drumpad_bit_mask::Bitable` for a fieldless enum.
///
/// Variants get bits by declaration order. The enum also receives `ALL`
/// and `COUNT` associated constants.
#[proc_macro_derive(Bit)]
pub fn derive_bit(input: TokenStream) -> TokenStream {
    handle_derive_bit(input)
}
