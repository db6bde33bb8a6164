use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

use crate::content::{ADDRESS, HERO_IMAGE, VENUE_NAME};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="relative h-screen w-full flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <img
                    src=HERO_IMAGE
                    alt="Nightclub Vibe"
                    class="w-full h-full object-cover opacity-60 grayscale filter contrast-125"
                />
                <div class="bg-gradient-to-t from-neutral-950 via-neutral-950/40 to-neutral-950/30 absolute inset-0"></div>
            </div>

            <div class="relative z-10 text-center px-6 max-w-4xl mx-auto flex flex-col items-center gap-8">
                <p class="uppercase text-[10px] md:text-xs text-neutral-400 tracking-[0.2em] animate-fade-in">
                    {ADDRESS}
                </p>
                <h1 class="md:text-7xl lg:text-8xl leading-[1.1] text-5xl italic text-white tracking-tight font-serif animate-fade-in-up">
                    {VENUE_NAME}
                </h1>
                <p class="md:text-base leading-relaxed text-sm text-neutral-400 max-w-md mx-auto animate-text-reveal">
                    "Afro/African Club Celebrating Sound, Style, And Culture. Expect The Hottest Afrobeats, \
                     Amapiano, And Dancehall, A Vibrant Crowd, And Nights That Hit So Hard They Feel Familiar"
                </p>

                <div class="mt-8 flex flex-col items-center gap-4">
                    <span class="h-16 w-[1px] bg-gradient-to-b from-neutral-500 to-transparent"></span>
                    <span class="text-[10px] text-neutral-500 uppercase tracking-widest">"Scroll"</span>
                </div>
            </div>
        </header>
    }
}
