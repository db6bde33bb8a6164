use leptos::IntoView;
use leptos::attr::custom::custom_attribute;
use leptos::component;
use leptos::prelude::AddAnyAttr;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::StyleAttribute;
use leptos::view;

use crate::components::icon::{Icon, IconKind};
use crate::content::{ADDRESS_FULL, MAP_EMBED_URL, VENUE_FEATURES, VenueFeature};

#[component]
fn Feature(feature: VenueFeature) -> impl IntoView {
    view! {
        <div class="flex gap-4 items-start">
            <div class="p-2 bg-neutral-900 rounded-full text-neutral-300">
                <Icon kind=feature.icon size=18/>
            </div>
            <div>
                <h5 class="text-white text-sm font-medium mb-1 uppercase tracking-wider">{feature.title}</h5>
                <p class="text-neutral-500 text-xs leading-relaxed">{feature.description}</p>
            </div>
        </div>
    }
}

/// Lazily loaded, darkened map of the venue.
///
/// `loading` goes through a custom attribute, leptos' iframe has no typed one.
#[component]
fn MapFrame() -> impl IntoView {
    view! {
        <iframe
            src=MAP_EMBED_URL
            width="100%"
            height="100%"
            style="border: 0"
            allowfullscreen=true
            referrerpolicy="no-referrer-when-downgrade"
            class="map-dark absolute inset-0 w-full h-full"
            {..custom_attribute("loading", "lazy")}
        ></iframe>
    }
}

/// Map embed plus the venue facts.
#[component]
pub fn Venue() -> impl IntoView {
    view! {
        <section class="md:px-12 bg-neutral-950 py-24 px-6" id="studio">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 max-w-6xl mx-auto items-center">
                <div class="overflow-hidden bg-neutral-900 w-full h-[500px] border-neutral-800 border rounded-sm relative shadow-2xl">
                    <MapFrame/>
                    <div class="absolute bottom-4 left-4 bg-neutral-950/80 backdrop-blur-sm border border-neutral-800 px-4 py-2 rounded-sm z-10 pointer-events-none">
                        <span class="text-[10px] text-white uppercase tracking-widest flex items-center gap-2">
                            <Icon kind=IconKind::MapPin size=12/>
                            {ADDRESS_FULL}
                        </span>
                    </div>
                </div>

                <div class="space-y-10">
                    <div>
                        <h3 class="serif text-3xl text-white tracking-tight mb-4 text-center lg:text-left uppercase">
                            "The Venue"
                        </h3>
                        <p class="leading-relaxed text-sm text-neutral-400 text-center lg:text-left">
                            "A luxury nightclub in the heart of the city, where elegant design, prime location, \
                             and an electric atmosphere come together for an unforgettable night."
                        </p>
                    </div>

                    <div class="space-y-6">
                        {VENUE_FEATURES
                            .iter()
                            .map(|feature| view! { <Feature feature=*feature/> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::RenderHtml;

    #[test]
    fn map_frame_loads_lazily() {
        let html = view! { <MapFrame/> }.to_html();
        assert!(html.contains(r#"loading="lazy""#), "{html}");
        assert!(html.contains("output=embed"), "{html}");
    }
}
