use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput, Error};

/// Registers the annotated device type in the device factory table when the binary is loaded.
///
/// The type must implement `CreateDevice` and `register_device` must be in scope.
#[proc_macro_attribute]
pub fn register_device(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Error::new_spanned(&input.generics, "a device created by kind cannot be generic")
            .to_compile_error()
            .into();
    }

    let fn_name = format_ident!("register_{}_device", name.to_string().to_case(Case::Snake));

    quote! {
        #input

        #[ctor::ctor]
        fn #fn_name() {
            register_device::<#name>();
        }
    }
    .into()
}
