use crate::components::NavBar;
use crate::pages::{About, Home, Login, PageNotFound};
use dioxus::prelude::*;

/// Every location the app knows about. The navigation bar wraps all of them; unmatched
/// paths land on [`PageNotFound`].
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/login")]
        Login {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pages_resolve_to_their_own_variants() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
        assert_eq!(Route::from_str("/about").ok(), Some(Route::About {}));
        assert_eq!(Route::from_str("/login").ok(), Some(Route::Login {}));
    }

    #[test]
    fn nested_and_unknown_paths_fall_through() {
        assert_eq!(
            Route::from_str("/about/team").ok(),
            Some(Route::PageNotFound { segments: vec!["about".to_owned(), "team".to_owned()] })
        );
        assert_eq!(
            Route::from_str("/nowhere").ok(),
            Some(Route::PageNotFound { segments: vec!["nowhere".to_owned()] })
        );
    }

    #[test]
    fn routes_display_as_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
