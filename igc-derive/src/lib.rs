// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for IGC record types.
//!
//! This crate allows to `derive` a `Record` implementation for records with a
//! fixed layout and implements `FromStr`, `Display` and `TryFrom` on the record
//! too.
//!
//! # Example
//!
//! Deriving an implementation on the flight recorder identification:
//!
//! ```ignore
//! #[derive(Record)]
//! #[igc(record_type = FlightRecorderId)]  // The leading literal of the line
//! pub struct ARecord {
//!     pub manufacturer_code: ManufacturerCode,
//!     pub unique_id: UniqueId,
//!     #[igc(rest)]  // Takes all bytes up to the end of the line
//!     pub id_extension: IdExtension,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, Fields, Meta, Path};

fn parse_record_type(input: &DeriveInput) -> Option<Path> {
    for attr in &input.attrs {
        if !attr.path().is_ident("igc") {
            continue;
        }

        // Handle #[igc(record_type = Ident)]
        if let Ok(Meta::NameValue(nv)) = attr.parse_args::<Meta>() {
            if nv.path.is_ident("record_type") {
                if let Expr::Path(expr) = nv.value {
                    return Some(expr.path);
                }
            }
        }
    }
    None
}

fn is_rest(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| {
        attr.path().is_ident("igc")
            && matches!(
                attr.parse_args::<Meta>(),
                Ok(Meta::Path(path)) if path.is_ident("rest")
            )
    })
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates the `Record` trait implementation together with `FromStr`,
/// `Display`, `TryFrom<&str>` and `TryFrom<&[u8]>`.
#[proc_macro_derive(Record, attributes(igc))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let record_type = parse_record_type(&input)
        .expect("Record types need a #[igc(record_type = ...)] attribute");

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("Record derive only supports structs with named fields"),
        },
        _ => panic!("Record derive only supports structs"),
    };

    let mut field_parsers = Vec::new();
    let mut field_encoders = Vec::new();
    let mut fixed_types = Vec::new();
    let mut has_rest = false;

    for (i, field) in fields.iter().enumerate() {
        let field_name = field.ident.as_ref().unwrap();
        let ty = &field.ty;

        if is_rest(field) {
            if i + 1 != fields.len() {
                panic!("only the last field of a record can take the rest of the line");
            }
            has_rest = true;
            field_parsers.push(quote! { #field_name: fields.rest()? });
        } else {
            fixed_types.push(ty);
            field_parsers.push(quote! { #field_name: fields.next()? });
        }

        field_encoders.push(quote! {
            ::core::fmt::Display::fmt(&self.#field_name, f)?;
        });
    }

    let max_length = if has_rest {
        quote! { ::core::option::Option::None }
    } else {
        quote! { ::core::option::Option::Some(Self::MIN_LENGTH) }
    };

    let expanded = quote! {
        impl #impl_generics crate::record::Record for #name #ty_generics #where_clause {
            const LITERAL: crate::fields::RecordType = crate::fields::RecordType::#record_type;
            const MIN_LENGTH: usize = 1 #(+ <#fixed_types as crate::FixedField>::LENGTH)*;
            const MAX_LENGTH: ::core::option::Option<usize> = #max_length;

            fn parse(fields: &mut crate::record::Fields<'_>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }

            fn encode(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&Self::LITERAL, f)?;
                #(#field_encoders)*
                Ok(())
            }
        }

        record_impls!(#name);
    };

    TokenStream::from(expanded)
}
