//! Scroll reveal binding for the browser
//!
//! Elements opt in with a `data-reveal` attribute. Each one gets a
//! `data-reveal-key`, is watched by an `IntersectionObserver` and receives
//! the `revealed` class once, after its stagger delay. A parent element may
//! set `data-reveal-stagger="100"` to stagger its revealing children.
//!
//! Every page owns a [`RevealScope`]: its trigger, observers and listeners
//! are dropped with the page.

use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::reveal::{
    RevealOptions, RevealTrigger, VisibilityEvent, VisibilityObserver, WatchedElement,
};

pub const REVEAL_ATTR: &str = "data-reveal";
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";
pub const REVEAL_STAGGER_ATTR: &str = "data-reveal-stagger";
pub const REVEALED_CLASS: &str = "revealed";

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

type Listener = Box<dyn FnOnce()>;

/// Site-wide reveal options
#[derive(Clone, Debug)]
pub struct RevealContext {
    pub options: RevealOptions,
}

/// Provide the configured reveal options to every page
pub fn provide_reveal_context(options: RevealOptions) -> RevealContext {
    let ctx = RevealContext { options };
    provide_context(ctx.clone());
    ctx
}

/// Get the reveal context; panics outside `provide_reveal_context`
pub fn use_reveal_context() -> RevealContext {
    use_context::<RevealContext>().expect("RevealContext not provided")
}

/// Fresh document-unique key for an element
pub fn next_reveal_key(prefix: &str) -> String {
    let id = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Reveal trigger owned by one page
#[derive(Clone, Copy)]
pub struct RevealScope {
    options: StoredValue<RevealOptions>,
    trigger: StoredValue<Option<RevealTrigger<String>>, LocalStorage>,
    listeners: StoredValue<HashMap<String, Listener>, LocalStorage>,
}

impl RevealScope {
    /// Build a trigger for the current owner. Falls back to immediate
    /// reveals when the browser lacks `IntersectionObserver`.
    pub fn new(options: RevealOptions) -> Self {
        let scope = Self {
            options: StoredValue::new(options),
            trigger: StoredValue::new_local(None),
            listeners: StoredValue::new_local(HashMap::new()),
        };
        let trigger = RevealTrigger::with_capability(scope.visibility_observer(), move |key: &String, delay_ms| {
            scope.reveal_after(key.clone(), delay_ms)
        });
        scope.trigger.set_value(Some(trigger));
        scope
    }

    pub fn options(&self) -> RevealOptions {
        self.options.get_value()
    }

    /// Register one element by key. Returns `false` if already known.
    pub fn register(&self, key: String, stagger_index: usize, options: &RevealOptions) -> bool {
        let element = WatchedElement::new(key).with_stagger_index(stagger_index);
        self.with_trigger(|trigger| trigger.register([element], options) > 0)
            .unwrap_or(false)
    }

    /// Stop watching an element and drop its reveal listener
    pub fn unregister(&self, key: &str) {
        let key = key.to_string();
        self.with_trigger(|trigger| trigger.unregister(&key));
        self.listeners.try_update_value(|l| l.remove(&key));
    }

    pub fn is_registered(&self, key: &str) -> bool {
        let key = key.to_string();
        self.trigger
            .try_with_value(|t| t.as_ref().is_some_and(|t| t.state(&key).is_some()))
            .unwrap_or(false)
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        let key = key.to_string();
        self.trigger
            .try_with_value(|t| t.as_ref().is_some_and(|t| t.is_revealed(&key)))
            .unwrap_or(false)
    }

    /// Run `f` once when the element with `key` reveals
    pub fn on_revealed(&self, key: impl Into<String>, f: impl FnOnce() + 'static) {
        let key = key.into();
        self.listeners.try_update_value(|l| l.insert(key, Box::new(f)));
    }

    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    fn handle_event(&self, event: VisibilityEvent<String>) {
        self.with_trigger(|trigger| trigger.handle_event(event));
    }

    fn with_trigger<T>(&self, f: impl FnOnce(&mut RevealTrigger<String>) -> T) -> Option<T> {
        self.trigger.try_update_value(|t| t.as_mut().map(f)).flatten()
    }

    // Runs with the trigger locked: the reveal itself is deferred to a timer.
    fn reveal_after(&self, key: String, delay_ms: u32) {
        #[cfg(feature = "csr")]
        {
            let scope = *self;
            gloo_timers::callback::Timeout::new(delay_ms, move || scope.finish_reveal(&key)).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, delay_ms);
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    fn finish_reveal(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(element) = web::find_element(key) {
                let _ = element.class_list().add_1(REVEALED_CLASS);
            }
        }

        // page already gone
        let Some(listener) = self.listeners.try_update_value(|l| l.remove(key)).flatten() else {
            return;
        };
        listener();
    }

    fn visibility_observer(&self) -> Option<Box<dyn VisibilityObserver<String>>> {
        #[cfg(feature = "csr")]
        {
            if web::supports_intersection_observer() {
                let scope = *self;
                return Some(Box::new(web::WebVisibilityObserver::new(move |event| {
                    scope.handle_event(event)
                })));
            }
            leptos::logging::warn!("IntersectionObserver unavailable, revealing content immediately");
        }
        None
    }
}

/// Reveal scope of the current page; panics outside a page
pub fn use_reveal_scope() -> RevealScope {
    use_context::<RevealScope>().expect("RevealScope not provided, call use_scroll_reveal in the page")
}

/// Create the page's reveal scope and register every `[data-reveal]`
/// element once the page is mounted.
pub fn use_scroll_reveal() -> RevealScope {
    let scope = RevealScope::new(use_reveal_context().options);
    provide_context(scope);

    Effect::new(move |_| {
        let registered = scan_marked_elements(scope);
        leptos::logging::log!("scroll reveal watching {} elements", registered);
    });

    scope
}

/// Watch one component-owned element and run `f` when it reveals.
/// Returns the key to render as its `data-reveal-key` attribute.
pub fn use_reveal_callback(prefix: &str, f: impl FnOnce() + 'static) -> String {
    let scope = use_reveal_scope();
    let key = next_reveal_key(prefix);
    scope.on_revealed(key.clone(), f);
    {
        // the effect runs once the element is mounted
        let key = key.clone();
        Effect::new(move |_| {
            scope.register(key.clone(), 0, &scope.options());
        });
    }
    {
        let key = key.clone();
        on_cleanup(move || scope.unregister(&key));
    }
    key
}

#[cfg(feature = "csr")]
fn scan_marked_elements(scope: RevealScope) -> usize {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(nodes) = document.query_selector_all(&format!("[{REVEAL_ATTR}]")) else {
        return 0;
    };

    let options = scope.options();
    let mut registered = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        if element.class_list().contains(REVEALED_CLASS) {
            continue;
        }
        // persistent chrome keeps its key across page changes
        let key = match element.get_attribute(REVEAL_KEY_ATTR) {
            Some(key) if scope.is_registered(&key) => continue,
            Some(key) => key,
            None => {
                let key = next_reveal_key("reveal");
                let _ = element.set_attribute(REVEAL_KEY_ATTR, &key);
                key
            }
        };

        let (index, options) = web::stagger_for(&element, &options);
        if scope.register(key, index, &options) {
            registered += 1;
        }
    }
    registered
}

#[cfg(not(feature = "csr"))]
fn scan_marked_elements(_scope: RevealScope) -> usize {
    0
}

#[cfg(feature = "csr")]
mod web {
    use super::*;
    use crate::core::reveal::{self, SiblingGroup, VisibilityEntry};
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    pub fn supports_intersection_observer() -> bool {
        web_sys::window().is_some_and(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
    }

    pub fn find_element(key: &str) -> Option<Element> {
        let document = web_sys::window()?.document()?;
        document
            .query_selector(&format!("[{REVEAL_KEY_ATTR}=\"{key}\"]"))
            .ok()
            .flatten()
    }

    /// Index among revealing siblings, with the parent's stagger step if set
    pub fn stagger_for(element: &Element, options: &RevealOptions) -> (usize, RevealOptions) {
        let Some(parent) = element.parent_element() else {
            return reveal::stagger_for(None, options);
        };

        let siblings = parent.children();
        let preceding = (0..siblings.length())
            .filter_map(|i| siblings.item(i))
            .take_while(|sibling| sibling != element)
            .map(|sibling| sibling.has_attribute(REVEAL_ATTR));
        let stagger_attr = parent.get_attribute(REVEAL_STAGGER_ATTR);
        let group = SiblingGroup::new(preceding, stagger_attr.as_deref());
        reveal::stagger_for(Some(&group), options)
    }

    type EventSink = Rc<dyn Fn(VisibilityEvent<String>)>;

    /// One `IntersectionObserver` per threshold/margin combination
    pub struct WebVisibilityObserver {
        sink: EventSink,
        observers: HashMap<String, IntersectionObserver>,
        observed: HashMap<String, (Element, String)>,
    }

    impl WebVisibilityObserver {
        pub fn new(sink: impl Fn(VisibilityEvent<String>) + 'static) -> Self {
            Self {
                sink: Rc::new(sink),
                observers: HashMap::new(),
                observed: HashMap::new(),
            }
        }

        fn observer_for(&mut self, group: &str, options: &RevealOptions) -> Option<IntersectionObserver> {
            if let Some(observer) = self.observers.get(group) {
                return Some(observer.clone());
            }

            let sink = self.sink.clone();
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    let entries = entries
                        .iter()
                        .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                        .filter_map(|entry| {
                            let key = entry.target().get_attribute(REVEAL_KEY_ATTR)?;
                            Some(VisibilityEntry::from_intersection(
                                key,
                                entry.is_intersecting(),
                                entry.intersection_ratio(),
                            ))
                        })
                        .collect();
                    sink(VisibilityEvent::new(entries));
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.visibility_threshold));
            init.set_root_margin(&options.root_margin.to_string());

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    callback.forget();
                    self.observers.insert(group.to_string(), observer.clone());
                    Some(observer)
                }
                Err(err) => {
                    leptos::logging::warn!("failed to create IntersectionObserver: {:?}", err);
                    None
                }
            }
        }
    }

    impl VisibilityObserver<String> for WebVisibilityObserver {
        fn observe(&mut self, key: &String, options: &RevealOptions) {
            let Some(element) = find_element(key) else {
                leptos::logging::warn!("reveal element '{}' not found in the document", key);
                return;
            };
            let group = format!("{}|{}", options.visibility_threshold, options.root_margin);
            let Some(observer) = self.observer_for(&group, options) else {
                return;
            };
            observer.observe(&element);
            self.observed.insert(key.clone(), (element, group));
        }

        fn unobserve(&mut self, key: &String) {
            if let Some((element, group)) = self.observed.remove(key) {
                if let Some(observer) = self.observers.get(&group) {
                    observer.unobserve(&element);
                }
            }
        }
    }

    impl Drop for WebVisibilityObserver {
        fn drop(&mut self) {
            for observer in self.observers.values() {
                observer.disconnect();
            }
        }
    }
}
