use crate::components::Footer;
use crate::navbar::Navbar;
use dioxus::prelude::*;

/// Site chrome: header navigation, the caller's content in `main`, footer.
///
/// `children` is placed as-is; nothing about it is inspected.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "flex flex-col min-h-screen max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
        Navbar {}
        main { class: "flex-grow flex flex-col w-full py-8", {children} }
        Footer {}
      }
    }
}
