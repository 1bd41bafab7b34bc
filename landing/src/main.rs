// AquaFlow Pro landing page, Leptos 0.8 edition
// Developed by the AquaFlow Pro web team (c)2025

mod logging;
mod notify;
mod sections;

use aquaflow_core::{VERSION, anchor};
use leptos::ev;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    tracing::info!(version = VERSION, "mounting landing page");
    for href in anchor::audit_page() {
        tracing::warn!(%href, "link points at a section that does not exist");
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Scroll offset is owned here and handed down read-only.
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    let listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        set_scroll_y.set(offset);
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class="page">
            <Background />
            <Nav />
            <main>
                <Hero scroll_y=scroll_y />
                <Services />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
