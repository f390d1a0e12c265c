//! Window scroll tracking
//!
//! One passive `scroll` listener feeds a [`ScrollMetrics`] signal, batched
//! to one update per animation frame. Navbar state, reading progress, the
//! back-to-top button and the header parallax all derive from it.

use leptos::prelude::*;

use crate::core::analytics::{PageAnalytics, PageVisit};
use crate::core::navigation::NavPage;
use crate::core::scroll::{NavbarState, ScrollDepth, ScrollMetrics};
use crate::core::timing::Throttle;
use crate::ui::storage::LocalStore;

/// Reactive scroll state shared through context
#[derive(Clone, Copy)]
pub struct ScrollContext {
    pub metrics: RwSignal<ScrollMetrics>,
    pub navbar: RwSignal<NavbarState>,
}

impl ScrollContext {
    pub fn reading_progress(&self) -> Signal<f64> {
        let metrics = self.metrics;
        Signal::derive(move || metrics.get().reading_progress())
    }

    pub fn back_to_top_visible(&self) -> Signal<bool> {
        let metrics = self.metrics;
        Signal::derive(move || metrics.get().back_to_top_visible())
    }
}

pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext not provided")
}

/// Install the scroll listener. `throttle_ms` limits depth logging.
pub fn provide_scroll_context(throttle_ms: f64) -> ScrollContext {
    let ctx = ScrollContext {
        metrics: RwSignal::new(ScrollMetrics::default()),
        navbar: RwSignal::new(NavbarState::default()),
    };
    provide_context(ctx);

    #[cfg(feature = "csr")]
    {
        use crate::core::scroll::NavbarTracker;
        use crate::core::timing::FrameGate;
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return ctx;
        };

        let gate = Rc::new(RefCell::new(FrameGate::new()));
        let tracker = Rc::new(RefCell::new(NavbarTracker::new()));
        let depth = Rc::new(RefCell::new(DepthLog::new(throttle_ms)));

        let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if !gate.borrow_mut().request() {
                return;
            }
            let gate = gate.clone();
            let tracker = tracker.clone();
            let depth = depth.clone();
            let frame = Closure::once_into_js(move || {
                gate.borrow_mut().complete();
                let Some(metrics) = read_metrics() else {
                    return;
                };
                ctx.metrics.set(metrics);
                ctx.navbar.set(tracker.borrow_mut().update(metrics.scroll_top));
                depth.borrow_mut().record(&metrics, js_sys::Date::now());
            });
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(frame.unchecked_ref());
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();

        if let Some(metrics) = read_metrics() {
            ctx.metrics.set(metrics);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = throttle_ms;
    }

    ctx
}

#[cfg(feature = "csr")]
fn read_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let scroll_top = window.page_y_offset().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollMetrics::new(scroll_top, height, viewport))
}

fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Record this visit's deepest scroll and time on page under
/// `pageAnalytics`, when the page is left or the document unloads.
pub fn use_page_analytics(page: NavPage) {
    let metrics = use_scroll_context().metrics;
    let visit = StoredValue::new(PageVisit::start(page.analytics_key(), now_ms()));

    if let Err(e) = visit.with_value(|v| PageAnalytics::new(LocalStore::open()).start(v)) {
        leptos::logging::warn!("analytics storage error: {}", e);
    }

    Effect::new(move |_| {
        let metrics = metrics.get();
        visit.update_value(|v| {
            v.record(&metrics);
        });
    });

    let save = move || {
        let Some(summary) = visit.try_update_value(|v| v.finish(now_ms())).flatten() else {
            return;
        };
        if let Err(e) = PageAnalytics::new(LocalStore::open()).save(page.analytics_key(), &summary) {
            leptos::logging::warn!("analytics storage error: {}", e);
        }
    };

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::beforeunload, move |_| save());
        on_cleanup(move || {
            handle.remove();
            save();
        });
    }
    #[cfg(not(feature = "csr"))]
    on_cleanup(save);
}

/// Smooth-scroll to the top of the page
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Logs each new 25% scroll-depth milestone, at most once per throttle window
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
struct DepthLog {
    depth: ScrollDepth,
    throttle: Throttle,
    last_milestone: u8,
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
impl DepthLog {
    fn new(throttle_ms: f64) -> Self {
        Self {
            depth: ScrollDepth::default(),
            throttle: Throttle::new(throttle_ms),
            last_milestone: 0,
        }
    }

    fn record(&mut self, metrics: &ScrollMetrics, now_ms: f64) {
        if !self.throttle.try_fire(now_ms) {
            return;
        }
        let max = self.depth.record(metrics);
        let milestone = max / 25 * 25;
        if milestone > self.last_milestone {
            self.last_milestone = milestone;
            leptos::logging::log!("scroll depth reached {}%", milestone);
        }
    }
}
