use super::Icon;
use aquaflow_core::content::{FLOATING_BADGES, STATS};
use aquaflow_core::motion::{STATS_BASE_DELAY_SECS, delay_style};
use aquaflow_core::{BUSINESS, HeroMotion, IconKind};
use leptos::prelude::*;

#[component]
pub fn Hero(
    /// Window scroll offset, owned by the page root
    #[prop(into)]
    scroll_y: Signal<f64>,
) -> impl IntoView {
    let motion = Memo::new(move |_| HeroMotion::at(scroll_y.get()));

    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-copy" style=move || motion.get().style()>
                        <div class="rise-in">
                            <div class="hero-badge pop-in">
                                <Icon kind=IconKind::Zap class="icon icon-sm" />
                                <span>"24/7 Emergency Service"</span>
                            </div>

                            <h1 class="hero-title">
                                <span class="gradient-text gradient-soft">"Expert"</span>
                                <br />
                                <span class="gradient-text gradient-bright">"Plumbing"</span>
                                <br />
                                <span>"Solutions"</span>
                            </h1>

                            <p class="hero-description">
                                "Transform your space with premium plumbing services. "
                                "Fast, reliable, and built for excellence."
                            </p>

                            <div class="hero-actions">
                                <a href="#contact" class="btn btn-primary">
                                    <span class="btn-label">
                                        <span>"Get Started"</span>
                                        <Icon kind=IconKind::ArrowRight class="icon icon-md btn-arrow" />
                                    </span>
                                    <span class="btn-sheen"></span>
                                </a>
                                <a href=BUSINESS.tel_href() class="btn btn-secondary">
                                    "Call Now"
                                </a>
                            </div>

                            <StatsStrip />
                        </div>
                    </div>
                    <HeroVisual />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsStrip() -> impl IntoView {
    view! {
        <div class="hero-stats">
            {STATS.iter().enumerate().map(|(i, stat)| {
                view! {
                    <div class="hero-stat rise-in" style=delay_style(STATS_BASE_DELAY_SECS, i)>
                        <span class="icon-halo">
                            <span class="glow"></span>
                            <Icon kind=stat.icon class="icon icon-lg" />
                        </span>
                        <p class="hero-stat-label">{stat.label}</p>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn HeroVisual() -> impl IntoView {
    view! {
        <div class="hero-visual slide-from-right">
            <div class="hero-visual-glow"></div>
            <div class="hero-visual-panel">
                <div class="hero-visual-grid"></div>
                <div class="hero-visual-center">
                    <div class="spin-pulse">
                        <Icon kind=IconKind::Droplet class="icon icon-hero" />
                    </div>
                </div>

                {FLOATING_BADGES.iter().enumerate().map(|(i, badge)| {
                    // Alternate corners and float direction.
                    let class = if i % 2 == 0 {
                        "floating-card floating-top-left float-up"
                    } else {
                        "floating-card floating-bottom-right float-down"
                    };
                    view! {
                        <div class=class>
                            <Icon kind=badge.icon class="icon icon-lg" />
                            <p class="floating-card-label">{badge.label}</p>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
