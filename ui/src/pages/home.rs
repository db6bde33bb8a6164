use leptos::IntoView;
use leptos::component;
use leptos::view;

use crate::components::{
    contact::Contact, gallery::Gallery, hero::Hero, process::Process, statement::Statement,
    testimonial::Testimonial, venue::Venue,
};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero/>
        <Statement/>
        <Gallery/>
        <Process/>
        <Venue/>
        <Testimonial/>
        <Contact/>
    }
}
