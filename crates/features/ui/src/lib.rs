//! # UI
//!
//! The Dioxus component tree. [`Route`] is the whole route table: the navigation bar is the
//! layout around every route, the three pages sit in its [`Outlet`](dioxus::prelude::Outlet),
//! and any other location falls through to [`PageNotFound`], which renders nothing.

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;

pub use crate::app::App;
pub use crate::components::NavBar;
pub use crate::pages::{About, Home, Login, PageNotFound};
pub use crate::routes::Route;
