use leptos::IntoView;
use leptos::component;
use leptos::prelude::AddAnyAttr;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    PenTool,
    ArrowUpRight,
    ArrowRight,
    MapPin,
    ShieldCheck,
    Quote,
    Instagram,
    Facebook,
    Star,
    Music,
}

impl IconKind {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "M6 6l12 12"],
            IconKind::PenTool => &[
                "M12 19l7-7 3 3-7 7-3-3z",
                "M18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5z",
                "M2 2l7.586 7.586",
                "M11 11m-2 0a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
            ],
            IconKind::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 10m-3 0a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            ],
            IconKind::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10",
                "m9 12 2 2 4-4",
            ],
            IconKind::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z",
                "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::Facebook => &[
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            ],
            IconKind::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            IconKind::Music => &[
                "M9 18V5l12-2v13",
                "M6 18m-3 0a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M18 16m-3 0a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            ],
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
