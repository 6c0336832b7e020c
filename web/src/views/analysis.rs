use dioxus::prelude::*;

#[component]
pub fn Analysis() -> Element {
    rsx! {
      section { class: "flex flex-col gap-4",
        h1 { class: "text-3xl font-bold uppercase tracking-tighter", "Analysis" }
        p { class: "text-gray-400", "No analysis has been loaded yet." }
      }
    }
}
