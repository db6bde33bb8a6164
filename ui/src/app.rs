use leptos::*;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;

use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Deja Vu | Afro & Caribbean Nightclub, Aberdeen"/>
        <Meta
            name="description"
            content="Deja Vu, a luxury Afro and Caribbean nightclub at 1 Diamond St, Aberdeen. Afrobeats, Amapiano, R&B classics and VIP bookings."
        />

        <div class="bg-neutral-950 min-h-screen selection:bg-white selection:text-black">
            <Navbar/>
            <Home/>
            <Footer/>
        </div>
    }
}
