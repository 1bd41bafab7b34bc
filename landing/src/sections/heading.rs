use super::Reveal;
use leptos::prelude::*;

/// Centered eyebrow + gradient title used by the services, reviews and contact sections.
#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    /// Accent rule under the title
    #[prop(optional)]
    rule: bool,
) -> impl IntoView {
    view! {
        <Reveal>
            <div class="section-header">
                <span class="section-eyebrow pop-in">{eyebrow}</span>
                <h2 class="section-title">
                    <span class="gradient-text">{title}</span>
                </h2>
                {rule.then(|| view! { <div class="section-rule"></div> })}
            </div>
        </Reveal>
    }
}
