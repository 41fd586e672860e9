use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::HomeView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Speller" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
