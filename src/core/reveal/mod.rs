//! Scroll reveal
//!
//! Marks watched elements as revealed the first time they become visible and
//! computes a per-element stagger delay from the element's sibling index.
//!
//! # Usage Example
//!
//! ```rust
//! use epic_adventures::core::reveal::{RevealOptions, RevealTrigger};
//!
//! let mut trigger = RevealTrigger::without_observer(|key: &u32, delay_ms| {
//!     println!("reveal {key} after {delay_ms}ms");
//! });
//! trigger.register([1u32, 2, 3], &RevealOptions::new().stagger_step_ms(100));
//! assert_eq!(trigger.pending(), 0);
//! ```

mod options;
mod stagger;
mod trigger;

pub use options::{
    DEFAULT_ROOT_MARGIN, DEFAULT_STAGGER_STEP_MS, DEFAULT_VISIBILITY_THRESHOLD, MarginValue,
    RevealError, RevealOptions, RootMargin,
};
pub use stagger::{SiblingGroup, parse_stagger_step, stagger_for};
pub use trigger::{
    RevealCallback, RevealState, RevealTrigger, VisibilityEntry, VisibilityEvent,
    VisibilityObserver, WatchedElement,
};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct NullObserver;

    impl VisibilityObserver<usize> for NullObserver {
        fn observe(&mut self, _key: &usize, _options: &RevealOptions) {}
        fn unobserve(&mut self, _key: &usize) {}
    }

    fn recording_trigger() -> (RevealTrigger<usize>, Rc<RefCell<Vec<(usize, u32)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let trigger = RevealTrigger::new(NullObserver, move |key: &usize, delay| {
            sink.borrow_mut().push((*key, delay));
        });
        (trigger, calls)
    }

    proptest! {
        #[test]
        fn each_element_reveals_at_most_once(
            count in 1usize..20,
            batches in prop::collection::vec(prop::collection::vec((0usize..25, any::<bool>()), 0..10), 0..10),
        ) {
            let (mut trigger, calls) = recording_trigger();
            trigger.register(0..count, &RevealOptions::default());

            for batch in batches {
                let entries = batch
                    .into_iter()
                    .map(|(key, visible)| if visible {
                        VisibilityEntry::visible(key)
                    } else {
                        VisibilityEntry::hidden(key)
                    })
                    .collect();
                trigger.handle_event(VisibilityEvent::new(entries));
            }

            let mut seen: HashMap<usize, usize> = HashMap::new();
            for (key, _) in calls.borrow().iter() {
                *seen.entry(*key).or_default() += 1;
            }
            prop_assert!(seen.values().all(|n| *n == 1));
            prop_assert!(seen.keys().all(|k| *k < count));
            prop_assert_eq!(trigger.pending(), count - seen.len());
        }

        #[test]
        fn delay_is_index_times_step(count in 1usize..30, step in 0u32..1000) {
            let (mut trigger, calls) = recording_trigger();
            trigger.register(0..count, &RevealOptions::new().stagger_step_ms(step));
            trigger.handle_event(VisibilityEvent::visible((0..count).rev()));

            for (key, delay) in calls.borrow().iter() {
                prop_assert_eq!(*delay, *key as u32 * step);
            }
            prop_assert_eq!(calls.borrow().len(), count);
        }
    }
}
