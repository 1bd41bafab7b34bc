use super::{Icon, SectionHeader};
use aquaflow_core::IconKind;
use aquaflow_core::content::{TESTIMONIAL_STARS, TESTIMONIALS, TestimonialCard};
use aquaflow_core::motion::delay_style;
use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="reviews" class="testimonials">
            <div class="container">
                <SectionHeader eyebrow="TESTIMONIALS" title="Client Success Stories" />
                <TestimonialGrid testimonials=TESTIMONIALS />
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialGrid(testimonials: &'static [TestimonialCard]) -> impl IntoView {
    view! {
        <div class="testimonials-grid">
            {testimonials.iter().enumerate().map(|(i, testimonial)| {
                view! {
                    <article class="card testimonial-card rise-in" style=delay_style(0.0, i)>
                        <div class="stars">
                            {(0..TESTIMONIAL_STARS).map(|_| {
                                view! { <Icon kind=IconKind::Star class="icon icon-star" /> }
                            }).collect::<Vec<_>>()}
                        </div>
                        <p class="testimonial-review">{format!("\"{}\"", testimonial.review)}</p>
                        <div class="testimonial-author">
                            <div class="avatar"></div>
                            <div>
                                <p class="testimonial-name">{testimonial.name}</p>
                                <p class="testimonial-location">{testimonial.location}</p>
                            </div>
                        </div>
                    </article>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
