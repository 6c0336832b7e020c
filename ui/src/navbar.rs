use dioxus::prelude::*;

/// A single entry of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Header navigation, in display order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Analysis",
        href: "/analysis",
    },
];

#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { class: "flex justify-between items-center py-6 border-b border-white/5",
            nav { class: "flex items-center bg-val-panel/50 px-6 py-2 rounded-full border border-white/5",
                ul { class: "flex items-center gap-8",
                    for link in NAV_LINKS {
                        li { key: "{link.href}",
                            a {
                                class: "nav-link text-white font-medium border-b-2 border-transparent hover:border-val-accent pb-0.5",
                                href: link.href,
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_home_then_analysis() {
        let links: Vec<_> = NAV_LINKS.iter().map(|l| (l.label, l.href)).collect();
        assert_eq!(links, vec![("Home", "/"), ("Analysis", "/analysis")]);
    }

    #[test]
    fn renders_one_anchor_per_link_in_order() {
        let html = dioxus_ssr::render_element(rsx! { Navbar {} });

        assert!(html.starts_with("<header"));
        assert_eq!(html.matches("<li").count(), 2);
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/analysis""#));

        let home = html.find(">Home</a>").expect("home link");
        let analysis = html.find(">Analysis</a>").expect("analysis link");
        assert!(home < analysis);
    }
}
