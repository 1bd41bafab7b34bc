//! Entrance-on-scroll for section headers and panels.
//!
//! A [`Reveal`] block starts hidden and gains `is-visible` the first time it
//! intersects the viewport. The observer disconnects after that, so the
//! animation runs once per page load. It also disconnects when the block is
//! unmounted before it was ever seen.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[component]
pub fn Reveal(
    /// Entrance variant: `rise`, `from-left`, `from-right` or `pop`
    #[prop(default = "rise")]
    motion: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    let observation = StoredValue::new_local(None::<Observation>);
    Effect::new(move |_| {
        if let Some(element) = target.get() {
            observation.set_value(observe_once(&element, move || set_visible.set(true)));
        }
    });
    release_on_cleanup(observation);

    view! {
        <div
            node_ref=target
            class=move || {
                if visible.get() {
                    format!("reveal reveal-{motion} is-visible")
                } else {
                    format!("reveal reveal-{motion}")
                }
            }
        >
            {children()}
        </div>
    }
}

/// A live observer and the callback it calls into. Dropping it disconnects.
struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn release_on_cleanup(observation: StoredValue<Option<Observation>, LocalStorage>) {
    on_cleanup(move || {
        observation.try_update_value(|slot| slot.take());
    });
}

fn observe_once(
    element: &web_sys::Element,
    on_visible: impl Fn() + Clone + 'static,
) -> Option<Observation> {
    let fallback = on_visible.clone();
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let seen = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if seen {
                on_visible();
                observer.disconnect();
            }
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            Some(Observation {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            tracing::warn!(?err, "IntersectionObserver unavailable, showing block immediately");
            fallback();
            None
        }
    }
}
