//! Platform glue: detached task spawning, window scrolling, page URL.
//! Everything here degrades to a no-op (or a fixed value) off the web target
//! so the crate stays testable on native.

use std::future::Future;

/// Spawn a future that outlives the current render. On the web this goes
/// straight to the microtask queue; on native it rides the Dioxus runtime.
pub fn spawn_detached<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(fut);

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(fut);
    }
}

/// Absolute URL of the current page, used for `og:url`.
pub fn page_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(href) = window.location().href() {
                return href;
            }
        }
    }
    "https://coursefront.app/product/ielts-course".to_string()
}

/// Register a scroll listener reporting the vertical offset. The closure is
/// intentionally leaked: the listener lives for the whole page session.
#[cfg(target_arch = "wasm32")]
pub fn watch_scroll(mut on_scroll: impl FnMut(f64) + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let listener_window = window.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let offset = listener_window.scroll_y().unwrap_or(0.0);
        on_scroll(offset);
    });
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_scroll(_on_scroll: impl FnMut(f64) + 'static) {}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
