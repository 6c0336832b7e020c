use dioxus::prelude::*;
use ui::PRODUCT_NAME;

#[component]
pub fn Home() -> Element {
    rsx! {
      section { class: "flex flex-col gap-4",
        h1 { class: "text-3xl font-bold uppercase tracking-tighter", "{PRODUCT_NAME}" }
        p { class: "text-gray-400", "Pick a page from the navigation to get started." }
      }
    }
}
