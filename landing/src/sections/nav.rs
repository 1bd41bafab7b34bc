use super::Icon;
use aquaflow_core::content::NAV_ITEMS;
use aquaflow_core::motion::delay_style;
use aquaflow_core::{BUSINESS, IconKind, MenuState};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());

    let listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu.get_untracked().is_open() {
            set_menu.update(|state| *state = state.close());
            tracing::debug!("mobile menu closed by Escape");
        }
    });
    on_cleanup(move || listener.remove());

    view! { <NavLayout menu=menu set_menu=set_menu /> }
}

#[component]
fn NavLayout(menu: ReadSignal<MenuState>, set_menu: WriteSignal<MenuState>) -> impl IntoView {
    let toggle_menu = move |_: ev::MouseEvent| {
        set_menu.update(|state| *state = state.toggle());
        tracing::debug!(state = ?menu.get_untracked(), "mobile menu toggled");
    };

    view! {
        <nav class="nav slide-down">
            <div class="nav-backdrop"></div>
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <span class="nav-logo">
                        <span class="glow"></span>
                        <Icon kind=IconKind::Droplet class="icon icon-logo" />
                    </span>
                    <span class="nav-brand-text">
                        <span class="nav-title gradient-text">{BUSINESS.name}</span>
                        <span class="nav-subtitle">"Premium Service"</span>
                    </span>
                </a>

                <div class="nav-links">
                    {NAV_ITEMS.iter().enumerate().map(|(i, item)| {
                        view! {
                            <a href=item.href() class="nav-link fade-down" style=delay_style(0.0, i)>
                                {item.label}
                                <span class="nav-link-underline"></span>
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <a href=BUSINESS.tel_href() class="nav-cta">
                    <Icon kind=IconKind::Phone class="icon icon-sm" />
                    <span>{BUSINESS.phone}</span>
                </a>

                <button
                    class="nav-toggle"
                    aria-label=move || if menu.get().is_open() { "Close menu" } else { "Open menu" }
                    on:click=toggle_menu
                >
                    {move || if menu.get().is_open() {
                        view! { <Icon kind=IconKind::X class="icon icon-md" /> }.into_any()
                    } else {
                        view! { <Icon kind=IconKind::Menu class="icon icon-md" /> }.into_any()
                    }}
                </button>
            </div>
        </nav>
        <MobileMenu menu=menu set_menu=set_menu />
    }
}

/// Full-screen overlay for small viewports.
///
/// Rendered after the `<nav>`, not inside it: the bar stacks above the overlay
/// and its toggle stays clickable while the menu is open.
#[component]
fn MobileMenu(menu: ReadSignal<MenuState>, set_menu: WriteSignal<MenuState>) -> impl IntoView {
    let follow_link = move |_: ev::MouseEvent| {
        set_menu.update(|state| *state = state.select_link());
        tracing::debug!("mobile menu closed by link");
    };

    view! {
        <Show when=move || menu.get().is_open()>
            <div class="mobile-menu slide-in">
                <div class="mobile-menu-links">
                    {NAV_ITEMS.iter().map(|item| {
                        view! {
                            <a href=item.href() class="mobile-menu-link" on:click=follow_link>
                                {item.label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </Show>
    }
}
