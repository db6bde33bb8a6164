use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

use crate::components::icon::{Icon, IconKind};

#[component]
pub fn Statement() -> impl IntoView {
    view! {
        <section class="py-24 md:py-32 px-6 md:px-12 bg-neutral-950">
            <div class="max-w-2xl mx-auto text-center space-y-8">
                <Icon kind=IconKind::PenTool class="mx-auto text-neutral-600"/>
                <h2 class="md:text-4xl serif leading-snug text-2xl text-white tracking-tight">
                    "\"Where Sophistication Meets the Night.\""
                </h2>
                <p class="leading-loose md:text-base text-sm font-light text-neutral-400">
                    "In a city as vibrant and evolving as Aberdeen, Deja Vu stands out as a symbol of \
                     sophistication and charm. With its carefully curated atmosphere, exceptional service, \
                     and refined offerings, every detail is designed to elevate your night. Experience \
                     Deja Vu, where high-end luxury meets timeless elegance in the heart of Aberdeen."
                </p>
            </div>
        </section>
    }
}
