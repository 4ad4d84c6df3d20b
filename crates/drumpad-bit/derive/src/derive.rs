use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields};

const MAX_VARIANTS: usize = 64;

pub(crate) fn handle_derive_bit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(name, "Bit can be derived only for enums"));
    };

    // Collect variant idents in declared order
    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "Bit supports only fieldless enum variants",
            ));
        }
        variants.push(&variant.ident);
    }
    if variants.len() > MAX_VARIANTS {
        return Err(Error::new_spanned(
            name,
            "Bit supports at most 64 variants",
        ));
    }

    let count = variants.len();
    let indices: Vec<Literal> = (0..count)
        .map(|i| Literal::u32_unsuffixed(i as u32))
        .collect();

    let index_arms = variants
        .iter()
        .zip(&indices)
        .map(|(v, i)| quote! { #name::#v => #i });
    let from_index_arms = variants
        .iter()
        .zip(&indices)
        .map(|(v, i)| quote! { #i => ::core::option::Option::Some(#name::#v) });

    Ok(quote! {
        impl ::drumpad_bit_mask::Bitable for #name {
            #[inline]
            fn bit(&self) -> u64 {
                1u64 << ::drumpad_bit_mask::Bitable::index(self)
            }

            #[inline]
            fn index(&self) -> u32 {
                match self { #( #index_arms, )* }
            }

            #[inline]
            fn from_index(index: u32) -> ::core::option::Option<Self> {
                match index {
                    #( #from_index_arms, )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #name {
            /// Every variant, in bit order.
            pub const ALL: [#name; #count] = [#( #name::#variants ),*];
            /// Number of variants.
            pub const COUNT: usize = #count;
        }
    })
}
