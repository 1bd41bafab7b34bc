use super::Icon;
use aquaflow_core::content::{FOOTER_LINKS, SOCIAL_LINKS};
use aquaflow_core::{BUSINESS, IconKind};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! { <FooterLayout year=year /> }
}

#[component]
fn FooterLayout(year: u32) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <Icon kind=IconKind::Droplet class="icon icon-lg" />
                            <span class="footer-title gradient-text">{BUSINESS.name}</span>
                        </div>
                        <p class="footer-blurb">
                            "Premium plumbing solutions for modern living. Available 24/7 for all your needs."
                        </p>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-links">
                            {FOOTER_LINKS.iter().map(|link| view! {
                                <li><a href=link.href class="footer-link">{link.label}</a></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Follow Us"</h4>
                        <div class="footer-social">
                            {SOCIAL_LINKS.iter().map(|social| view! {
                                <a href=social.href class="social-link" aria-label=social.icon.label()>
                                    <Icon kind=social.icon class="icon icon-social" />
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{BUSINESS.copyright(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn keeps_about_link_and_placeholder_socials() {
        let html = view! { <FooterLayout year=2025 /> }.to_html();

        assert!(html.contains("href=\"#about\""));
        assert_eq!(html.matches("class=\"social-link\"").count(), 4);
        assert!(html.contains("aria-label=\"LinkedIn\""));
    }

    #[test]
    fn copyright_uses_given_year() {
        let html = view! { <FooterLayout year=2031 /> }.to_html();
        assert!(html.contains("2031 AquaFlow Pro. All rights reserved."));
    }
}
