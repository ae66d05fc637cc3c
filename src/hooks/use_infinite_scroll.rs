use dioxus::prelude::*;

/// Margin below the viewport at which the sentinel counts as visible
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
const ROOT_MARGIN: &str = "300px";

/// Minimum gap between two triggers, in milliseconds
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
const DEBOUNCE_MS: f64 = 1000.0;

/// Calls `on_reach_end` when the returned sentinel id scrolls into view.
///
/// The observer is only attached while `has_more && !loading`, and is
/// disconnected when either flips or the component unmounts.
///
/// ```rust
/// let sentinel_id = use_infinite_scroll(list.load_more, list.has_more, list.loading);
/// rsx! { div { id: "{sentinel_id}", class: "h-4" } }
/// ```
pub fn use_infinite_scroll(on_reach_end: Callback<()>, has_more: Signal<bool>, loading: Signal<bool>) -> String {
    let sentinel_id = use_hook(|| format!("scroll-sentinel-{}", uuid::Uuid::new_v4()));

    #[cfg(target_family = "wasm")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let observer: Rc<RefCell<Option<web_sys::IntersectionObserver>>> = use_hook(|| Rc::new(RefCell::new(None)));

        let observer_for_drop = observer.clone();
        use_drop(move || {
            if let Some(obs) = observer_for_drop.borrow_mut().take() {
                obs.disconnect();
            }
        });

        let id = sentinel_id.clone();
        use_effect(move || {
            let enabled = *has_more.read() && !*loading.read();

            if let Some(previous) = observer.borrow_mut().take() {
                previous.disconnect();
            }
            if !enabled {
                return;
            }

            let id = id.clone();
            let observer = observer.clone();
            spawn(async move {
                // Let the sentinel render first
                gloo_timers::future::TimeoutFuture::new(100).await;
                match attach_observer(&id, on_reach_end) {
                    Ok(obs) => *observer.borrow_mut() = Some(obs),
                    Err(e) => log::debug!("Infinite scroll not attached: {}", e),
                }
            });
        });
    }

    #[cfg(not(target_family = "wasm"))]
    {
        let _ = (on_reach_end, has_more, loading);
    }

    sentinel_id
}

#[cfg(target_family = "wasm")]
fn attach_observer(id: &str, on_reach_end: Callback<()>) -> Result<web_sys::IntersectionObserver, String> {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| format!("Sentinel {} not in DOM", id))?;

    let mut last_fired = 0.0;
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<web_sys::IntersectionObserverEntry>()
                .map(|e| e.is_intersecting())
                .unwrap_or(false)
        });
        if !visible {
            return;
        }

        let now = js_sys::Date::now();
        if now - last_fired > DEBOUNCE_MS {
            last_fired = now;
            log::debug!("Sentinel visible, loading more");
            on_reach_end.call(());
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);

    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| format!("IntersectionObserver failed: {:?}", e))?;
    observer.observe(&element);

    // The observer owns the only reference to the closure
    callback.forget();
    Ok(observer)
}
