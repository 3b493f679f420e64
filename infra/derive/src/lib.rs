#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! Right now this is a single attribute, [`macro@waypoint_error`], that turns a plain enum
//! into a `thiserror` error with context support.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Declares a workspace error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * An `<Name>Ext` trait with `.context(...)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or a `#[source]`/`#[from]` field).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant
///   exists.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant carrying a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[waypoint_derive::waypoint_error]
/// pub enum LoadError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, LoadError> {
///     std::fs::read_to_string("client.toml").context("Reading client config")
/// }
/// ```
#[proc_macro_attribute]
pub fn waypoint_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
