use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type};

/// Shape of a single error variant as far as code generation is concerned.
struct ErrorVariant {
    ident: Ident,
    source: Option<(Ident, Type)>,
    has_context: bool,
    cfg_attrs: Vec<Attribute>,
}

impl ErrorVariant {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match collect_variants(&input) {
        Ok(variants) => render(&input, &variants),
        Err(err) => err.to_compile_error(),
    }
}

fn collect_variants(input: &DeriveInput) -> syn::Result<Vec<ErrorVariant>> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(input.span(), "waypoint_error can only be applied to enums"));
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "waypoint_error requires named fields so source/context can be wired",
            ));
        };

        let mut has_context = false;
        let mut source = None;
        for field in &fields.named {
            let Some(name) = field.ident.as_ref() else { continue };
            if name == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if source.is_none() && is_source_field(field) {
                source = Some((name.clone(), field.ty.clone()));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variants with a source need a `context: Option<Cow<'static, str>>` field",
            ));
        }

        variants.push(ErrorVariant {
            ident: variant.ident.clone(),
            source,
            has_context,
            cfg_attrs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect(),
        });
    }

    Ok(variants)
}

fn render(input: &DeriveInput, variants: &[ErrorVariant]) -> TokenStream {
    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let present = derived_traits(&input.attrs);
    let mut missing = Vec::new();
    if !present.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !present.contains("Error") {
        missing.push(quote! { ::thiserror::Error });
    }
    let derive = if missing.is_empty() { quote!() } else { quote! { #[derive(#(#missing),*)] } };

    let set_context = variants.iter().filter(|v| v.has_context).map(|v| {
        let (ident, cfg) = (&v.ident, &v.cfg_attrs);
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    let source_impls = variants.iter().filter(|v| !v.is_internal()).filter_map(|v| {
        let (field, ty) = v.source.as_ref()?;
        let (ident, cfg) = (&v.ident, &v.cfg_attrs);
        Some(quote! {
            #(#cfg)*
            #[automatically_derived]
            impl ::core::convert::From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            #(#cfg)*
            #[automatically_derived]
            impl<T> #ext<T> for ::core::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::core::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    });

    let internal_impls = variants.iter().find(|v| v.is_internal()).map(|v| {
        let cfg = &v.cfg_attrs;
        quote! {
            #(#cfg)*
            impl ::core::convert::From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfg)*
            impl ::core::convert::From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    });

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive
        #input

        pub trait #ext<T> {
            /// Attaches a human-readable context to the error.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#set_context)*
                        _ => {}
                    }
                    err
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn is_source_field(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|i| i == "source")
        || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
}

fn derived_traits(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut names = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                names.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    names
}

/// Matches `Option<Cow<'static, str>>` by the last path segment of each layer.
fn is_context_type(ty: &Type) -> bool {
    let Some(option_args) = last_segment_args(ty, "Option") else { return false };
    let Some(GenericArgument::Type(cow)) = option_args.first() else { return false };
    let Some(cow_args) = last_segment_args(cow, "Cow") else { return false };

    let mut args = cow_args.iter();
    let is_static = matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let is_str = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );
    is_static && is_str
}

fn last_segment_args<'a>(
    ty: &'a Type,
    ident: &str,
) -> Option<&'a syn::punctuated::Punctuated<GenericArgument, syn::token::Comma>> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    if segment.ident != ident {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(&args.args),
        _ => None,
    }
}
