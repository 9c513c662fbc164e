//! Procedural macros for objval
//!
//! This crate provides `#[derive(Properties)]`, which generates one
//! `objval::Property` descriptor per named field of a struct.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, LitStr};

/// Derive property descriptors for a struct with named fields
///
/// Every field gets an associated constant named after the field in
/// `SCREAMING_SNAKE_CASE`, with the field's visibility. The property name is
/// the field name in `PascalCase`.
///
/// The struct also gets an `objval::IsEmpty` impl under which a present value
/// is never empty, so `not_empty` on an `Option` of it fails only for `None`.
///
/// # Struct attributes
///
/// - `#[property(skip_is_empty)]` - Do not implement `IsEmpty`
///
/// # Field attributes
///
/// - `#[property(name = "...")]` - Override the property name
/// - `#[property(display = "...")]` - Set the default display name
/// - `#[property(skip)]` - Generate no descriptor for this field
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Properties)]
/// struct Message {
///     #[property(display = "Message subject")]
///     subject: String,
///     attachments: Option<Vec<Attachment>>,
/// }
///
/// validator.bind(Message::SUBJECT).not_empty();
/// ```
#[proc_macro_derive(Properties, attributes(property))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Properties cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "Properties can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Properties can only be derived for structs",
            ))
        }
    };

    let struct_options = StructOptions::from_input(&input)?;

    let mut consts = Vec::new();
    for field in fields {
        let options = FieldOptions::from_field(field)?;
        if options.skip {
            continue;
        }

        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_name = field_ident.unraw().to_string();
        let const_ident = format_ident!("{}", field_name.to_uppercase());
        let name = options.name.unwrap_or_else(|| to_pascal_case(&field_name));
        let vis = &field.vis;
        let ty = &field.ty;

        let display = options.display.map(|display| {
            quote! { .with_display_name(#display) }
        });
        let doc = format!("Property descriptor for `{field_name}`.");

        consts.push(quote! {
            #[doc = #doc]
            #[allow(dead_code)]
            #vis const #const_ident: ::objval::Property<#ident, #ty> =
                ::objval::Property::new(#name, |this: &#ident| &this.#field_ident)#display;
        });
    }

    let is_empty = (!struct_options.skip_is_empty).then(|| {
        quote! {
            #[automatically_derived]
            impl ::objval::IsEmpty for #ident {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #ident {
            #(#consts)*
        }

        #is_empty
    })
}

#[derive(Default)]
struct StructOptions {
    skip_is_empty: bool,
}

impl StructOptions {
    fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut options = Self::default();

        for attr in &input.attrs {
            if !attr.path().is_ident("property") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip_is_empty") {
                    options.skip_is_empty = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported property attribute, expected `skip_is_empty`"))
                }
            })?;
        }

        Ok(options)
    }
}

#[derive(Default)]
struct FieldOptions {
    name: Option<String>,
    display: Option<String>,
    skip: bool,
}

impl FieldOptions {
    fn from_field(field: &Field) -> syn::Result<Self> {
        let mut options = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("property") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    options.name = Some(value.value());
                    Ok(())
                } else if meta.path.is_ident("display") {
                    let value: LitStr = meta.value()?.parse()?;
                    options.display = Some(value.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported property attribute, expected `name`, `display` or `skip`"))
                }
            })?;
        }

        Ok(options)
    }
}

/// `first_name` -> `FirstName`
fn to_pascal_case(field_name: &str) -> String {
    field_name
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
