//! Browser visibility observation
//!
//! Bridges `IntersectionObserver` to the pure visibility logic in
//! [`crate::core::visibility`] and [`crate::core::reveal`]:
//! - [`use_active_section`] tracks which page section is on screen
//! - [`use_reveal`] drives one section's entrance animation flag

use leptos::html;
use leptos::prelude::*;

use crate::core::{RevealConfig, SectionRegistry};
#[cfg(not(feature = "ssr"))]
use crate::core::{ACTIVE_SECTION_THRESHOLD, RevealState, VisibilityEntry};
use crate::ui::state::UiStateContext;

#[cfg(not(feature = "ssr"))]
mod observer {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::VisibilityEntry;

    type BatchCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// An `IntersectionObserver` together with the closure it calls.
    ///
    /// Dropping it disconnects the observer and frees the closure.
    pub struct Observation {
        observer: IntersectionObserver,
        _callback: BatchCallback,
    }

    impl Observation {
        pub fn new(
            threshold: f64,
            mut on_batch: impl FnMut(Vec<VisibilityEntry>) + 'static,
        ) -> Result<Self, JsValue> {
            let callback = BatchCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        VisibilityEntry::new(
                            entry.target().id(),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        )
                    })
                    .collect();
                on_batch(batch);
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

            Ok(Self {
                observer,
                _callback: callback,
            })
        }

        pub fn observe(&self, element: &web_sys::Element) {
            self.observer.observe(element);
        }

        /// Stop delivering batches; safe to call from inside the callback
        pub fn disconnect(&self) {
            self.observer.disconnect();
        }
    }

    impl Drop for Observation {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Track the active section and keep the navbar theme in sync.
///
/// Observes the element of every registered section id; ids with no element
/// in the document are skipped. Observation stops when the owner is cleaned up.
pub fn use_active_section(ctx: UiStateContext, registry: SectionRegistry) {
    #[cfg(not(feature = "ssr"))]
    {
        use observer::Observation;

        let observation = StoredValue::new_local(None::<Observation>);

        Effect::new(move |_| {
            if observation.with_value(|o| o.is_some()) {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let batch_registry = registry.clone();
            let created = Observation::new(ACTIVE_SECTION_THRESHOLD, move |batch| {
                ctx.apply_visibility(&batch, &batch_registry);
            });

            match created {
                Ok(obs) => {
                    for element in registry.ids().filter_map(|id| document.get_element_by_id(id)) {
                        obs.observe(&element);
                    }
                    observation.set_value(Some(obs));
                }
                Err(e) => leptos::logging::warn!("Section tracking unavailable: {:?}", e),
            }
        });

        on_cleanup(move || {
            let _ = observation.try_update_value(|o| o.take());
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (ctx, registry);
    }
}

/// Reveal flag for a section element, driven by its own visibility.
///
/// Starts hidden. With [`RevealPolicy::Once`](crate::core::RevealPolicy::Once)
/// the observer is disconnected after the first reveal.
pub fn use_reveal(node_ref: NodeRef<html::Section>, config: RevealConfig) -> Signal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use observer::Observation;
        use std::cell::RefCell;
        use std::rc::Rc;

        let observation = StoredValue::new_local(None::<Rc<Observation>>);

        Effect::new(move |_| {
            let Some(section) = node_ref.get() else {
                return;
            };
            if observation.with_value(|o| o.is_some()) {
                return;
            }

            let state = RefCell::new(RevealState::new(config.policy));
            // Filled right after construction so the callback can disconnect itself
            let handle: Rc<RefCell<Option<std::rc::Weak<Observation>>>> = Rc::default();
            let callback_handle = handle.clone();

            let created = Observation::new(config.threshold, move |batch: Vec<VisibilityEntry>| {
                let mut state = state.borrow_mut();
                for entry in &batch {
                    if state.observe(entry.has_entered(config.threshold)) {
                        set_visible.set(state.is_visible());
                    }
                }
                if state.is_settled() {
                    if let Some(obs) = callback_handle.borrow().as_ref().and_then(|w| w.upgrade()) {
                        obs.disconnect();
                    }
                }
            });

            match created {
                Ok(obs) => {
                    let obs = Rc::new(obs);
                    obs.observe(&section);
                    *handle.borrow_mut() = Some(Rc::downgrade(&obs));
                    observation.set_value(Some(obs));
                }
                Err(e) => {
                    leptos::logging::warn!("Reveal observer unavailable: {:?}", e);
                    // Without an observer the content would stay hidden
                    set_visible.set(true);
                }
            }
        });

        on_cleanup(move || {
            let _ = observation.try_update_value(|o| o.take());
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (node_ref, config, set_visible);
    }

    visible.into()
}
