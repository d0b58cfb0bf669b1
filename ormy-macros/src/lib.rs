mod decode_field;

use decode_field::{FieldMetadata, decode_field};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, parse_macro_input};

fn targets(fields: &[FieldMetadata]) -> proc_macro2::TokenStream {
    let targets = fields.iter().map(|f| {
        let ident = &f.ident;
        quote!(&mut self.#ident as &mut dyn ::ormy::Target)
    });
    quote!(::std::vec![#(#targets),*])
}

/// Implements `ormy::Record` for a struct with named fields.
///
/// Each field is populated from the column with the same name, unless
/// `#[ormy(name = "column")]` says otherwise. The struct must implement
/// `Default` and every field type must implement `ormy::AsValue`.
#[proc_macro_derive(Record, attributes(ormy))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemStruct);
    let name = &item.ident;
    let type_name = name.to_string();
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let Fields::Named(..) = &item.fields else {
        return syn::Error::new_spanned(&item, "Record can only be derived for structs with named fields")
            .to_compile_error()
            .into();
    };
    let fields = item.fields.iter().map(decode_field).collect::<Vec<_>>();
    let len = fields.len();
    let field_defs = fields.iter().map(|f| {
        let name = &f.name;
        let column = &f.column;
        quote!(::ormy::FieldDef { name: #name, column: #column })
    });
    let targets = targets(&fields);
    quote! {
        impl #impl_generics ::ormy::Record for #name #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn fields() -> &'static [::ormy::FieldDef] {
                static FIELDS: [::ormy::FieldDef; #len] = [#(#field_defs),*];
                &FIELDS
            }

            fn targets(&mut self) -> ::std::vec::Vec<&mut dyn ::ormy::Target> {
                #targets
            }
        }
    }
    .into()
}
