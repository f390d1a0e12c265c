//! One-shot reveal trigger driven by visibility events
//!
//! The trigger owns the per-element revealed state. A host feeds it
//! [`VisibilityEvent`]s (from `IntersectionObserver` in the browser, or
//! directly in tests) and receives `on_reveal(key, delay_ms)` exactly once
//! per element. What "reveal" looks like is entirely up to the host.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::RevealOptions;

/// Host capability used to watch elements for visibility changes
///
/// Implementations forward visibility changes back into
/// [`RevealTrigger::handle_event`].
pub trait VisibilityObserver<K> {
    /// Start watching `key` with the given options
    fn observe(&mut self, key: &K, options: &RevealOptions);

    /// Stop watching `key`
    fn unobserve(&mut self, key: &K);
}

/// Callback invoked once per revealed element with the computed delay in ms
pub type RevealCallback<K> = Box<dyn FnMut(&K, u32)>;

/// Reveal state of a watched element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    /// Terminal
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Descriptor of an element handed to [`RevealTrigger::register`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedElement<K> {
    pub key: K,
    /// Position among sibling watched elements; defaults to the position
    /// in the registered sequence
    pub stagger_index: Option<usize>,
}

impl<K> WatchedElement<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            stagger_index: None,
        }
    }

    pub fn with_stagger_index(mut self, index: usize) -> Self {
        self.stagger_index = Some(index);
        self
    }
}

impl<K> From<K> for WatchedElement<K> {
    fn from(key: K) -> Self {
        Self::new(key)
    }
}

/// One element's visibility change inside a batch
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry<K> {
    pub key: K,
    pub is_visible: bool,
    /// Observed intersection ratio, informational only
    pub ratio: f64,
}

impl<K> VisibilityEntry<K> {
    pub fn visible(key: K) -> Self {
        Self {
            key,
            is_visible: true,
            ratio: 1.0,
        }
    }

    pub fn hidden(key: K) -> Self {
        Self {
            key,
            is_visible: false,
            ratio: 0.0,
        }
    }

    /// Entry from an `IntersectionObserver` report. The observer only
    /// reports threshold crossings, so `is_intersecting` alone decides
    /// visibility; a ratio below the threshold still counts.
    pub fn from_intersection(key: K, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            key,
            is_visible: is_intersecting,
            ratio,
        }
    }
}

/// A batch of visibility changes; order inside the batch is not meaningful
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEvent<K> {
    pub entries: Vec<VisibilityEntry<K>>,
}

impl<K> VisibilityEvent<K> {
    pub fn new(entries: Vec<VisibilityEntry<K>>) -> Self {
        Self { entries }
    }

    /// Batch reporting every key as visible
    pub fn visible(keys: impl IntoIterator<Item = K>) -> Self {
        Self::new(keys.into_iter().map(VisibilityEntry::visible).collect())
    }

    /// Batch reporting every key as hidden
    pub fn hidden(keys: impl IntoIterator<Item = K>) -> Self {
        Self::new(keys.into_iter().map(VisibilityEntry::hidden).collect())
    }
}

#[derive(Debug, Clone, Copy)]
struct Watched {
    state: RevealState,
    delay_ms: u32,
}

/// Tracks watched elements and fires `on_reveal` once per element
pub struct RevealTrigger<K> {
    watched: HashMap<K, Watched>,
    /// Revealed then unregistered; never registered again
    retired: HashSet<K>,
    observer: Option<Box<dyn VisibilityObserver<K>>>,
    on_reveal: RevealCallback<K>,
}

impl<K> RevealTrigger<K>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    /// Create a trigger backed by a visibility observer
    pub fn new(
        observer: impl VisibilityObserver<K> + 'static,
        on_reveal: impl FnMut(&K, u32) + 'static,
    ) -> Self {
        Self::with_capability(Some(Box::new(observer)), on_reveal)
    }

    /// Create a trigger for a host without visibility observation.
    /// Every registered element reveals immediately with zero delay.
    pub fn without_observer(on_reveal: impl FnMut(&K, u32) + 'static) -> Self {
        Self::with_capability(None, on_reveal)
    }

    /// Create a trigger from an optional capability
    pub fn with_capability(
        observer: Option<Box<dyn VisibilityObserver<K>>>,
        on_reveal: impl FnMut(&K, u32) + 'static,
    ) -> Self {
        Self {
            watched: HashMap::new(),
            retired: HashSet::new(),
            observer,
            on_reveal: Box::new(on_reveal),
        }
    }

    /// Whether the host can observe visibility
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Start watching `elements`.
    ///
    /// Keys that are already known keep their state and are not re-armed,
    /// and keys that revealed before being unregistered stay revealed.
    /// Neither takes up a stagger position: an element without an explicit
    /// index gets its position among the newly added ones.
    /// Returns the number of newly registered elements.
    pub fn register<I, E>(&mut self, elements: I, options: &RevealOptions) -> usize
    where
        I: IntoIterator<Item = E>,
        E: Into<WatchedElement<K>>,
    {
        let mut added = Vec::new();

        for element in elements {
            let element = element.into();
            if self.watched.contains_key(&element.key) {
                tracing::debug!(key = ?element.key, "element already registered, skipping");
                continue;
            }
            if self.retired.contains(&element.key) {
                tracing::debug!(key = ?element.key, "element already revealed, skipping");
                continue;
            }

            let index = element.stagger_index.unwrap_or(added.len());
            self.watched.insert(
                element.key.clone(),
                Watched {
                    state: RevealState::Unseen,
                    delay_ms: options.delay_for(index),
                },
            );
            added.push(element.key);
        }

        match self.observer.as_mut() {
            Some(observer) => {
                for key in &added {
                    observer.observe(key, options);
                }
            }
            None => {
                if !added.is_empty() {
                    tracing::warn!(
                        count = added.len(),
                        "visibility observation unavailable, revealing immediately"
                    );
                }
                for key in &added {
                    if let Some(watched) = self.watched.get_mut(key) {
                        watched.state = RevealState::Revealed;
                    }
                    (self.on_reveal)(key, 0);
                }
            }
        }

        added.len()
    }

    /// Stop watching a single element and forget it.
    ///
    /// An element that already revealed is remembered, so registering the
    /// same key again never fires a second reveal. An unseen element can be
    /// registered again normally.
    /// Returns `false` if the key was not registered.
    pub fn unregister(&mut self, key: &K) -> bool {
        let Some(watched) = self.watched.remove(key) else {
            return false;
        };

        // revealed elements were already unobserved
        if watched.state.is_revealed() {
            self.retired.insert(key.clone());
        } else if let Some(observer) = self.observer.as_mut() {
            observer.unobserve(key);
        }
        true
    }

    /// Apply a batch of visibility changes. Returns how many elements revealed.
    pub fn handle_event(&mut self, event: VisibilityEvent<K>) -> usize {
        let mut revealed = 0;

        for entry in event.entries {
            if !entry.is_visible {
                continue;
            }
            let Some(watched) = self.watched.get_mut(&entry.key) else {
                continue;
            };
            if watched.state.is_revealed() {
                continue;
            }

            watched.state = RevealState::Revealed;
            let delay_ms = watched.delay_ms;
            tracing::debug!(key = ?entry.key, delay_ms, "element revealed");

            if let Some(observer) = self.observer.as_mut() {
                observer.unobserve(&entry.key);
            }
            (self.on_reveal)(&entry.key, delay_ms);
            revealed += 1;
        }

        revealed
    }

    /// State of a registered element
    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.watched.get(key).map(|w| w.state)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.state(key).is_some_and(|s| s.is_revealed())
    }

    /// Whether `key` revealed and was later unregistered
    pub fn is_retired(&self, key: &K) -> bool {
        self.retired.contains(key)
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Number of registered elements not yet revealed
    pub fn pending(&self) -> usize {
        self.watched
            .values()
            .filter(|w| !w.state.is_revealed())
            .count()
    }
}

impl<K> std::fmt::Debug for RevealTrigger<K>
where
    K: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealTrigger")
            .field("watched", &self.watched.len())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(u32, u32)>>>;

    #[derive(Default, Clone)]
    struct RecordingObserver {
        observed: Rc<RefCell<Vec<u32>>>,
        unobserved: Rc<RefCell<Vec<u32>>>,
    }

    impl VisibilityObserver<u32> for RecordingObserver {
        fn observe(&mut self, key: &u32, _options: &RevealOptions) {
            self.observed.borrow_mut().push(*key);
        }

        fn unobserve(&mut self, key: &u32) {
            self.unobserved.borrow_mut().push(*key);
        }
    }

    fn trigger_with_log() -> (RevealTrigger<u32>, Log, RecordingObserver) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let observer = RecordingObserver::default();
        let sink = log.clone();
        let trigger = RevealTrigger::new(observer.clone(), move |key: &u32, delay| {
            sink.borrow_mut().push((*key, delay));
        });
        (trigger, log, observer)
    }

    #[test]
    fn test_register_observes_each_element() {
        let (mut trigger, log, observer) = trigger_with_log();
        let added = trigger.register([1u32, 2, 3], &RevealOptions::default());

        assert_eq!(added, 3);
        assert_eq!(*observer.observed.borrow(), vec![1, 2, 3]);
        assert_eq!(trigger.pending(), 3);
        assert!(log.borrow().is_empty());
        assert_eq!(trigger.state(&2), Some(RevealState::Unseen));
    }

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let (mut trigger, log, observer) = trigger_with_log();
        trigger.register([1u32], &RevealOptions::default());
        trigger.handle_event(VisibilityEvent::visible([1]));

        let added = trigger.register([1u32, 2], &RevealOptions::default());
        assert_eq!(added, 1);
        assert!(trigger.is_revealed(&1));
        assert_eq!(*observer.observed.borrow(), vec![1, 2]);

        trigger.handle_event(VisibilityEvent::visible([1]));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_reveal_unobserves_element() {
        let (mut trigger, _log, observer) = trigger_with_log();
        trigger.register([7u32, 8], &RevealOptions::default());
        trigger.handle_event(VisibilityEvent::visible([8]));

        assert_eq!(*observer.unobserved.borrow(), vec![8]);
        assert_eq!(trigger.pending(), 1);
    }

    #[test]
    fn test_hidden_entries_do_not_reveal() {
        let (mut trigger, log, _observer) = trigger_with_log();
        trigger.register([1u32], &RevealOptions::default());

        assert_eq!(trigger.handle_event(VisibilityEvent::hidden([1])), 0);
        assert!(log.borrow().is_empty());
        assert!(!trigger.is_revealed(&1));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let (mut trigger, log, _observer) = trigger_with_log();
        trigger.register([1u32], &RevealOptions::default());

        assert_eq!(trigger.handle_event(VisibilityEvent::visible([99])), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_explicit_stagger_index_overrides_position() {
        let (mut trigger, log, _observer) = trigger_with_log();
        let options = RevealOptions::new().stagger_step_ms(50);
        trigger.register(
            [
                WatchedElement::new(1).with_stagger_index(4),
                WatchedElement::new(2),
            ],
            &options,
        );
        trigger.handle_event(VisibilityEvent::visible([1, 2]));

        assert_eq!(*log.borrow(), vec![(1, 200), (2, 50)]);
    }

    #[test]
    fn test_unregister_revealed_element_does_not_unobserve_twice() {
        let (mut trigger, _log, observer) = trigger_with_log();
        trigger.register([1u32], &RevealOptions::default());
        trigger.handle_event(VisibilityEvent::visible([1]));

        assert!(trigger.unregister(&1));
        assert_eq!(*observer.unobserved.borrow(), vec![1]);
        assert!(!trigger.unregister(&1));
        assert!(trigger.is_empty());
    }

    #[test]
    fn test_without_observer_reveals_on_register() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut trigger = RevealTrigger::without_observer(move |key: &u32, delay| {
            sink.borrow_mut().push((*key, delay));
        });

        assert!(!trigger.has_observer());
        trigger.register([1u32, 2, 3], &RevealOptions::new().stagger_step_ms(100));

        assert_eq!(*log.borrow(), vec![(1, 0), (2, 0), (3, 0)]);
        assert_eq!(trigger.pending(), 0);

        // later events change nothing
        trigger.handle_event(VisibilityEvent::visible([1, 2, 3]));
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_duplicate_in_one_batch_does_not_take_a_position() {
        let (mut trigger, log, _observer) = trigger_with_log();
        let added = trigger.register([1u32, 1, 2], &RevealOptions::new().stagger_step_ms(100));
        trigger.handle_event(VisibilityEvent::visible([1, 2]));

        assert_eq!(added, 2);
        assert_eq!(*log.borrow(), vec![(1, 0), (2, 100)]);
    }

    #[test]
    fn test_known_keys_do_not_shift_new_positions() {
        let (mut trigger, log, _observer) = trigger_with_log();
        let options = RevealOptions::new().stagger_step_ms(100);
        trigger.register([1u32], &options);
        trigger.register([1u32, 2, 3], &options);
        trigger.handle_event(VisibilityEvent::visible([2, 3]));

        assert_eq!(*log.borrow(), vec![(2, 0), (3, 100)]);
    }

    #[test]
    fn test_reregistering_revealed_element_never_fires_again() {
        let (mut trigger, log, observer) = trigger_with_log();
        trigger.register([1u32], &RevealOptions::default());
        trigger.handle_event(VisibilityEvent::visible([1]));
        assert!(trigger.unregister(&1));
        assert!(trigger.is_retired(&1));

        assert_eq!(trigger.register([1u32], &RevealOptions::default()), 0);
        trigger.handle_event(VisibilityEvent::visible([1]));

        assert_eq!(*log.borrow(), vec![(1, 0)]);
        assert_eq!(*observer.observed.borrow(), vec![1]);
        assert_eq!(trigger.state(&1), None);
    }

    #[test]
    fn test_reregistering_unseen_element_rearms_it() {
        let (mut trigger, log, observer) = trigger_with_log();
        trigger.register([5u32], &RevealOptions::default());
        assert!(trigger.unregister(&5));
        assert!(!trigger.is_retired(&5));

        assert_eq!(trigger.register([5u32], &RevealOptions::default()), 1);
        trigger.handle_event(VisibilityEvent::visible([5]));

        assert_eq!(*log.borrow(), vec![(5, 0)]);
        assert_eq!(*observer.observed.borrow(), vec![5, 5]);
        assert_eq!(*observer.unobserved.borrow(), vec![5, 5]);
    }

    #[test]
    fn test_intersection_below_threshold_still_reveals() {
        // a section ten viewports tall never reaches a 0.1 ratio
        let (mut trigger, log, _observer) = trigger_with_log();
        trigger.register([1u32], &RevealOptions::default());

        let entry = VisibilityEntry::from_intersection(1u32, true, 0.04);
        assert_eq!(trigger.handle_event(VisibilityEvent::new(vec![entry])), 1);
        assert_eq!(*log.borrow(), vec![(1, 0)]);
    }

    #[test]
    fn test_intersection_leaving_viewport_is_hidden() {
        let (mut trigger, log, _observer) = trigger_with_log();
        trigger.register([1u32], &RevealOptions::default());

        let entry = VisibilityEntry::from_intersection(1u32, false, 0.0);
        assert_eq!(trigger.handle_event(VisibilityEvent::new(vec![entry])), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_separate_registrations_keep_their_own_step() {
        let (mut trigger, log, _observer) = trigger_with_log();
        trigger.register([1u32, 2], &RevealOptions::new().stagger_step_ms(100));
        trigger.register([3u32, 4], &RevealOptions::new().stagger_step_ms(10));

        trigger.handle_event(VisibilityEvent::visible([4, 3, 2, 1]));

        let mut calls = log.borrow().clone();
        calls.sort();
        assert_eq!(calls, vec![(1, 0), (2, 100), (3, 0), (4, 10)]);
    }
}
