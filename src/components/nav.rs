use std::fmt::Debug;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config;
use crate::handoff::use_order_handoff;

/// Whether the nav bar gets its elevated look. The threshold itself is not elevated.
pub fn is_elevated(offset_px: f64) -> bool {
    offset_px > config::NAV_SCROLL_THRESHOLD_PX
}

/// Logs a failed listener call. Returns whether the call went through.
fn listener_ok<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to {} nav scroll listener: {:?}", action, e);
            false
        }
    }
}

fn current_scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| is_elevated(current_scroll_offset()));
    let order = use_order_handoff(None);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let mut last = *is_scrolled;

            let scroll_callback = Closure::wrap(Box::new(move || {
                let elevated = is_elevated(current_scroll_offset());
                if elevated != last {
                    debug!("Nav elevated: {}", elevated);
                    last = elevated;
                    is_scrolled.set(elevated);
                }
            }) as Box<dyn FnMut()>);

            match &window {
                Some(window) => {
                    listener_ok(
                        "add",
                        window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                    );
                }
                None => warn!("No window, nav stays flat"),
            }

            move || {
                if let Some(window) = &window {
                    listener_ok(
                        "remove",
                        window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                    );
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href={config::COMPANY_URL} target="_blank" rel="noopener noreferrer" class="nav-logo">
                    <img src={config::LOGO_URL} alt={config::COMPANY_NAME} />
                </a>
                <button class="nav-order-button" onclick={order.start} disabled={order.busy}>
                    <IconView icon={if order.busy { Icon::Loader } else { Icon::WhatsApp }} />
                    <span class="label-long">{"Order Gas"}</span>
                    <span class="label-short">{"Order"}</span>
                </button>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 72px;
                }
                .nav-logo img {
                    height: 44px;
                    width: auto;
                    object-fit: contain;
                }
                .nav-order-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.65rem 1.4rem;
                    background: #25D366;
                    color: white;
                    border: none;
                    border-radius: 999px;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 8px 20px rgba(37, 211, 102, 0.3);
                }
                .nav-order-button .icon { width: 18px; height: 18px; }
                .label-short { display: none; }
                @media (max-width: 640px) {
                    .label-long { display: none; }
                    .label-short { display: inline; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_flips_just_past_ten_pixels() {
        assert!(!is_elevated(0.0));
        assert!(!is_elevated(9.0));
        assert!(!is_elevated(10.0));
        assert!(is_elevated(10.5));
        assert!(is_elevated(11.0));
        assert!(is_elevated(2_000.0));
    }

    #[test]
    fn listener_failures_are_reported() {
        assert!(listener_ok::<&str>("add", Ok(())));
        assert!(!listener_ok("remove", Err("InvalidStateError")));
    }
}
