use leptos::IntoView;
use leptos::component;
use leptos::ev::SubmitEvent;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::view;

use crate::components::icon::{Icon, IconKind};

const FIELD_CLASS: &str = "w-full bg-neutral-950 border border-neutral-800 text-neutral-200 text-sm p-4 \
                           rounded-sm focus:border-neutral-500 outline-none transition-colors";
const LABEL_CLASS: &str = "text-[10px] uppercase tracking-wider text-neutral-500 font-medium";

/// Inquiry form. Submitting is a no-op: the default action is suppressed and
/// nothing leaves the page.
#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("contact form submit suppressed");
    };

    view! {
        <section class="md:px-12 bg-neutral-900 py-24 px-6" id="contact">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-16">
                    <h3 class="md:text-4xl serif text-3xl text-white tracking-tight mb-4 uppercase">"GET IN TOUCH"</h3>
                    <p class="text-[10px] text-neutral-500 uppercase tracking-widest">"Inquiries & VIP Bookings"</p>
                </div>

                <form class="space-y-8" on:submit=on_submit>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="space-y-2">
                            <label class=LABEL_CLASS>"Full Name"</label>
                            <input type="text" class=FIELD_CLASS placeholder="Your name"/>
                        </div>
                        <div class="space-y-2">
                            <label class=LABEL_CLASS>"Email"</label>
                            <input type="email" class=FIELD_CLASS placeholder="your@email.com"/>
                        </div>
                    </div>

                    <div class="space-y-2">
                        <label class=LABEL_CLASS>"Message"</label>
                        <textarea
                            class=format!("{FIELD_CLASS} min-h-[120px]")
                            placeholder="Tell us about your event or VIP booking inquiry..."
                        ></textarea>
                    </div>

                    <div class="pt-6 text-center">
                        <button
                            type="submit"
                            class="group relative inline-flex items-center justify-center px-8 py-4 text-[10px] font-medium tracking-widest uppercase text-white border border-neutral-700 hover:bg-white hover:text-black transition-all duration-300 w-full md:w-auto"
                        >
                            <span>"Send Request"</span>
                            <Icon
                                kind=IconKind::ArrowRight
                                size=16
                                class="ml-2 opacity-0 -translate-x-2 group-hover:opacity-100 group-hover:translate-x-0 transition-all duration-300"
                            />
                        </button>
                        <p class="text-[9px] text-neutral-600 mt-4 uppercase">
                            "By submitting this form, you consent to being contacted to discuss your request."
                        </p>
                    </div>
                </form>
            </div>
        </section>
    }
}
