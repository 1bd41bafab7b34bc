use leptos::prelude::*;

/// Fixed gradient + dotted pattern behind every section.
#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-gradient"></div>
            <div class="backdrop-pattern"></div>
        </div>
    }
}
