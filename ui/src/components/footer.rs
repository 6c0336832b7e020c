use crate::branding::COPYRIGHT;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "py-4 text-center border-t border-white/5 text-[10px] font-mono uppercase tracking-widest text-gray-500",
        {COPYRIGHT}
      }
    }
}
