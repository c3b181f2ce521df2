use dioxus::prelude::*;
use ui::{Footer, Navbar};

use crate::Route;

/// Navbar and footer around every page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "d-flex flex-column min-vh-100",
            Navbar {}
            main {
                class: "flex-grow-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
