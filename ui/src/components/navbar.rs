use leptos::IntoView;
use leptos::component;
use leptos::ev;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Update;
use leptos::view;

use crate::components::icon::{Icon, IconKind};
use crate::content::{NAV_LINKS, NavLink, OVERLAY_SOCIAL, VENUE_NAME};
use crate::hooks::{use_body_scroll_lock, use_scrolled};
use crate::nav::MenuState;

fn bar_class(scrolled: bool) -> String {
    format!(
        "fixed w-full z-[100] transition-all duration-500 {}",
        if scrolled {
            "py-4 backdrop-blur-lg bg-neutral-950/95 shadow-xl shadow-black/20"
        } else {
            "py-6 bg-transparent"
        }
    )
}

fn overlay_class(menu: MenuState) -> String {
    format!(
        "fixed inset-0 bg-neutral-950 z-[105] flex flex-col items-center justify-center \
         gap-10 text-3xl font-serif transition-all duration-500 ease-in-out {}",
        if menu.is_open() {
            "opacity-100 translate-y-0 visible"
        } else {
            "opacity-0 -translate-y-full invisible"
        }
    )
}

fn desktop_link_class(link: &NavLink) -> &'static str {
    if link.call_to_action {
        "hover:text-white transition-colors border border-neutral-800 px-4 py-2 \
         hover:bg-white hover:text-black rounded-full transition-all"
    } else {
        "hover:text-white transition-colors"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let scrolled = use_scrolled();
    use_body_scroll_lock(move || menu.get().is_open());

    let close = move |_: ev::MouseEvent| menu.update(MenuState::close);

    view! {
        <nav class=move || bar_class(scrolled.get())>
            <div class="max-w-7xl mx-auto px-6 md:px-12 flex items-center justify-between">
                <a
                    href="#"
                    class="uppercase z-[110] text-xl font-semibold text-white tracking-tighter mix-blend-difference whitespace-nowrap"
                >
                    {VENUE_NAME}
                </a>

                // hidden below lg
                <div class="hidden lg:flex text-[10px] font-medium text-neutral-400 tracking-[0.2em] gap-x-10 uppercase items-center pointer-events-auto">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class=desktop_link_class(link)>{link.label}</a>
                        })
                        .collect_view()}
                </div>

                <button
                    class="lg:hidden text-white z-[110] p-2 focus:outline-none bg-neutral-900/50 rounded-full backdrop-blur-sm border border-white/10"
                    aria-label="Toggle Menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || {
                        let kind = if menu.get().is_open() { IconKind::Close } else { IconKind::Menu };
                        view! { <Icon kind size=20/> }
                    }}
                </button>

                <div class=move || overlay_class(menu.get())>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.href
                                class="hover:text-white transition-colors italic text-center"
                                on:click=close
                            >
                                {link.label}
                            </a>
                        })
                        .collect_view()}

                    <div class="flex gap-8 mt-12">
                        {OVERLAY_SOCIAL
                            .iter()
                            .map(|link| view! {
                                <a
                                    href=link.href
                                    target=link.new_tab.then_some("_blank")
                                    class="text-neutral-500 hover:text-white"
                                    aria-label=link.label
                                >
                                    <Icon kind=link.icon/>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_switches_style_on_scroll() {
        assert!(bar_class(false).contains("bg-transparent"));
        assert!(!bar_class(false).contains("backdrop-blur-lg"));
        assert!(bar_class(true).contains("backdrop-blur-lg"));
        assert!(bar_class(true).contains("py-4"));
    }

    #[test]
    fn overlay_hidden_unless_open() {
        assert!(overlay_class(MenuState::Closed).contains("invisible"));
        assert!(overlay_class(MenuState::Open).contains(" visible"));
        assert!(!overlay_class(MenuState::Open).contains("invisible"));
    }

    #[test]
    fn only_the_cta_gets_a_pill() {
        for link in NAV_LINKS {
            assert_eq!(desktop_link_class(link).contains("rounded-full"), link.call_to_action);
        }
    }
}
