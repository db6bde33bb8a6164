use chrono::Datelike;
use leptos::IntoView;
use leptos::component;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

use crate::components::icon::{Icon, IconKind};
use crate::content::{FACEBOOK_URL, INSTAGRAM_SHARE_URL};

fn copyright(year: i32) -> String {
    format!("© {year} Deja Vu. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-neutral-950 border-neutral-900 border-t py-12 px-6">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row gap-8 items-center justify-between">
                <div class="text-center md:text-left">
                    <p class="text-xl text-white tracking-tight font-serif uppercase">"DEJA VU."</p>
                    <p class="text-[10px] text-neutral-600 mt-1 uppercase">"Aberdeen, UK"</p>
                </div>

                <div class="flex gap-x-6">
                    <a
                        href=INSTAGRAM_SHARE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white transition-colors text-neutral-500"
                        aria-label="Instagram"
                    >
                        <Icon kind=IconKind::Instagram size=20 class="text-white"/>
                    </a>
                    <a
                        href=FACEBOOK_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white transition-colors text-neutral-500"
                        aria-label="Facebook"
                    >
                        <Icon kind=IconKind::Facebook size=20 class="text-white"/>
                    </a>
                </div>

                <div class="text-[10px] text-neutral-700 font-medium uppercase">{copyright(year)}</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::copyright;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Deja Vu. All rights reserved.");
    }
}
