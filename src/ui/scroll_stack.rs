//! Scroll-stack container component
//!
//! Renders its children as sticky cards and drives [`ScrollStackEngine`] from
//! window scroll/resize events. Frames are written straight to each card's
//! inline style so scrolling never goes through the reactive render path.
//!
//! Lifecycle:
//! - on mount the layout is computed once
//! - every scroll/resize signal schedules at most one animation frame
//! - on cleanup the listeners are dropped, the pending frame is cancelled and
//!   the engine is detached

use leptos::html;
use leptos::prelude::*;

use crate::core::EngineConfig;

#[cfg(not(feature = "ssr"))]
use crate::core::{PanelFrame, PanelSurface, ScrollStackEngine};
#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// A panel backed by a DOM element
#[cfg(not(feature = "ssr"))]
struct DomPanel(web_sys::HtmlElement);

#[cfg(not(feature = "ssr"))]
impl PanelSurface for DomPanel {
    fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    fn apply(&self, frame: &PanelFrame) {
        let style = self.0.style();
        let _ = style.set_property("top", &frame.top_css());
        let _ = style.set_property("margin-bottom", &frame.margin_bottom_css());
        let _ = style.set_property("transform", &frame.transform_css());
        if let Some(filter) = frame.filter_css() {
            let _ = style.set_property("filter", &filter);
        }
        let _ = style.set_property("z-index", &frame.z_index_css());
    }
}

/// Direct children of the container, in document order
#[cfg(not(feature = "ssr"))]
fn panel_elements(container: &web_sys::HtmlDivElement) -> Vec<DomPanel> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(DomPanel)
        .collect()
}

#[cfg(not(feature = "ssr"))]
fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Container that stacks its [`ScrollStackItem`] children while scrolling
#[component]
pub fn ScrollStack(
    /// Layout configuration, fixed for the lifetime of the component
    #[prop(optional)]
    config: EngineConfig,
    /// Extra classes for the container
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        let engine = StoredValue::new(ScrollStackEngine::new(config));
        let pending_frame = StoredValue::new(None::<AnimationFrameRequestHandle>);

        // Measure and apply against the freshest geometry
        let recompute = move || {
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let panels = panel_elements(&container);
            let height = viewport_height();
            engine.try_with_value(|engine| engine.recompute(height, &panels));
        };

        let run_frame = move || {
            pending_frame.try_set_value(None);
            let panels = container_ref
                .get_untracked()
                .map(|container| panel_elements(&container))
                .unwrap_or_default();
            let height = viewport_height();
            engine.try_update_value(|engine| engine.run_frame(height, &panels));
        };

        let on_signal = move || {
            let schedule = engine
                .try_update_value(|engine| engine.on_signal())
                .unwrap_or(false);
            if !schedule {
                return;
            }
            match request_animation_frame_with_handle(run_frame) {
                Ok(handle) => {
                    pending_frame.try_set_value(Some(handle));
                }
                Err(e) => {
                    leptos::logging::warn!("requestAnimationFrame failed: {:?}", e);
                    run_frame();
                }
            }
        };

        // Initial layout once the container is in the DOM
        Effect::new(move |_| {
            if container_ref.get().is_some() {
                recompute();
            }
        });

        let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| on_signal());
        let resize_listener = window_event_listener(leptos::ev::resize, move |_| on_signal());

        on_cleanup(move || {
            drop(scroll_listener);
            drop(resize_listener);
            if let Some(Some(handle)) = pending_frame.try_get_value() {
                handle.cancel();
            }
            engine.try_update_value(|engine| engine.detach());
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = config;
    }

    view! {
        <div node_ref=container_ref class=format!("relative w-full {}", class)>
            {children()}
        </div>
    }
}

/// A single sticky card inside a [`ScrollStack`]
#[component]
pub fn ScrollStackItem(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("scroll-stack-card sticky origin-top will-change-transform {}", class)
            style="width: 100%; box-sizing: border-box; backface-visibility: hidden; transform-style: preserve-3d;"
        >
            {children()}
        </div>
    }
}
