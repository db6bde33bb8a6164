use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::view;

use crate::components::icon::{Icon, IconKind};
use crate::content::{GALLERY, GalleryItem, INSTAGRAM_URL};

#[component]
fn GalleryCard(index: usize, item: GalleryItem) -> impl IntoView {
    view! {
        <div class="break-inside-avoid mb-6 group cursor-pointer">
            <div class="relative overflow-hidden rounded-sm bg-neutral-900">
                <img
                    src=item.image
                    alt=format!("Event {index}")
                    class="group-hover:grayscale-0 group-hover:scale-105 transition-all duration-700 ease-out hover:opacity-100 opacity-90 w-full h-auto object-cover grayscale"
                />
            </div>
            {item.caption().map(|c| view! {
                <div class="mt-3 flex justify-between items-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <span class="text-[10px] text-neutral-400">{c.date.to_owned()}</span>
                    <span class="text-[10px] text-gray-50 uppercase tracking-tighter">{c.tag.to_owned()}</span>
                </div>
            })}
        </div>
    }
}

/// "Social Events": masonry grid of past nights.
#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section class="md:px-12 bg-neutral-950 pb-24 px-4" id="portfolio">
            <div class="flex justify-between items-end mb-12 border-b border-neutral-900 pb-6">
                <h3 class="serif text-xl text-white tracking-tight">"Social Events"</h3>
                <a
                    href=INSTAGRAM_URL
                    target="_blank"
                    class="uppercase hover:text-white transition-colors flex items-center gap-2 text-[10px] text-neutral-500 tracking-widest"
                >
                    "Instagram" <Icon kind=IconKind::ArrowUpRight size=14/>
                </a>
            </div>

            <div class="masonry-grid">
                {GALLERY
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! { <GalleryCard index item=*item/> })
                    .collect_view()}
            </div>
        </section>
    }
}
