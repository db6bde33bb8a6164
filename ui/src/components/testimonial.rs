use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

use crate::components::icon::{Icon, IconKind};
use crate::content::TESTIMONIAL;

#[component]
pub fn Testimonial() -> impl IntoView {
    view! {
        <section class="py-20 bg-neutral-950 border-t border-neutral-900">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <Icon kind=IconKind::Quote size=32 class="mx-auto text-neutral-700 mb-6"/>
                <p class="md:text-xl serif leading-relaxed text-lg italic text-neutral-300 mb-6">
                    {format!("\"{}\"", TESTIMONIAL.quote)}
                </p>
                <p class="uppercase text-[10px] text-neutral-500 tracking-widest">
                    {format!("— {}", TESTIMONIAL.author)}
                </p>
            </div>
        </section>
    }
}
