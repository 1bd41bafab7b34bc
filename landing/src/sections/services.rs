use super::{Icon, SectionHeader};
use aquaflow_core::IconKind;
use aquaflow_core::content::{SERVICES, ServiceCard};
use aquaflow_core::motion::delay_style;
use leptos::prelude::*;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <SectionHeader eyebrow="WHAT WE OFFER" title="Premium Services" rule=true />
                <ServiceGrid services=SERVICES />
            </div>
        </section>
    }
}

/// One card per service, in slice order.
#[component]
pub fn ServiceGrid(services: &'static [ServiceCard]) -> impl IntoView {
    view! {
        <div class="services-grid">
            {services.iter().enumerate().map(|(i, service)| {
                view! { <ServiceCardView service=*service index=i /> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ServiceCardView(service: ServiceCard, index: usize) -> impl IntoView {
    view! {
        <article class="card service-card rise-in" style=delay_style(0.0, index)>
            <div class="card-hover-wash"></div>
            <div class="card-body">
                <div class="icon-tile-wrap">
                    <span class="glow"></span>
                    <div class="icon-tile">
                        <Icon kind=service.icon class="icon icon-lg" />
                    </div>
                </div>
                <h3 class="card-title">{service.title}</h3>
                <p class="card-text">{service.description}</p>
                <div class="card-link">
                    <span>"Learn More"</span>
                    <Icon kind=IconKind::ArrowRight class="icon icon-sm" />
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn titles_in(html: &str) -> Vec<&str> {
        html.split("<h3 class=\"card-title\">")
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .collect()
    }

    #[test]
    fn renders_one_card_per_service_in_order() {
        let html = view! { <ServiceGrid services=SERVICES /> }.to_html();

        assert_eq!(html.matches("service-card").count(), 4);
        assert_eq!(
            titles_in(&html),
            vec!["Leak Repair", "Drain Solutions", "Water Heaters", "Emergency"]
        );
    }

    #[test]
    fn cards_are_staggered_by_index() {
        let html = view! { <ServiceGrid services=SERVICES /> }.to_html();
        assert!(html.contains("animation-delay: 0.00s;"));
        assert!(html.contains("animation-delay: 0.30s;"));
    }

    #[test]
    fn empty_list_renders_no_cards() {
        const NONE: &[ServiceCard] = &[];
        let html = view! { <ServiceGrid services=NONE /> }.to_html();
        assert!(html.contains("services-grid"));
        assert_eq!(html.matches("service-card").count(), 0);
    }
}
