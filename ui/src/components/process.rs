use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::GlobalAttributes;
use leptos::view;

use crate::content::{PROCESS_STEPS, ProcessStep};

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section class="md:px-12 border-y bg-neutral-900/30 border-neutral-900 py-24 px-6" id="process">
            <div class="max-w-6xl mx-auto">
                <div class="mb-16">
                    <h3 class="text-3xl serif text-white tracking-tight mb-2">"The Vibe"</h3>
                    <p class="text-sm text-neutral-500 max-w-lg">
                        "As the evening unfolds, refined Afro and Caribbean rhythms set the tone, creating a \
                         seamless flow from relaxed elegance to a lively, sophisticated dancefloor."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                    <For
                        each=move || PROCESS_STEPS.iter().copied()
                        key=|step: &ProcessStep| step.id
                        children=|step: ProcessStep| view! {
                            <div class="group">
                                <span class="block text-5xl serif text-neutral-800 group-hover:text-neutral-600 transition-colors mb-6">
                                    {step.id}
                                </span>
                                <h4 class="text-lg font-medium text-white mb-3">{step.title}</h4>
                                <p class="leading-relaxed text-sm text-neutral-400">{step.description}</p>
                            </div>
                        }
                    />
                </div>
            </div>
        </section>
    }
}
