#[cfg(test)]
mod tests {
    use crate::core::{
        Countdown, DestinationFilter, FavoritesStore, MemoryStore, Notification,
        NotificationQueue, RevealOptions, RevealTrigger, SiteConfig, VisibilityEntry,
        VisibilityEvent, VisibilityObserver, WatchedElement,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Observer that records what it was asked to watch
    #[derive(Default, Clone)]
    struct FakeObserver {
        watching: Rc<RefCell<Vec<&'static str>>>,
    }

    impl VisibilityObserver<&'static str> for FakeObserver {
        fn observe(&mut self, key: &&'static str, _options: &RevealOptions) {
            self.watching.borrow_mut().push(*key);
        }

        fn unobserve(&mut self, key: &&'static str) {
            self.watching.borrow_mut().retain(|k| k != key);
        }
    }

    type Calls = Rc<RefCell<Vec<(&'static str, u32)>>>;

    fn trigger_with(observer: FakeObserver) -> (RevealTrigger<&'static str>, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let trigger = RevealTrigger::new(observer, move |key: &&'static str, delay| {
            sink.borrow_mut().push((*key, delay));
        });
        (trigger, calls)
    }

    #[test]
    fn test_three_cards_staggered_by_100ms() {
        let (mut trigger, calls) = trigger_with(FakeObserver::default());
        let options = RevealOptions::new().stagger_step_ms(100);

        trigger.register(["card-a", "card-b", "card-c"], &options);
        trigger.handle_event(VisibilityEvent::visible(["card-a", "card-b", "card-c"]));

        assert_eq!(
            *calls.borrow(),
            vec![("card-a", 0), ("card-b", 100), ("card-c", 200)]
        );
    }

    #[test]
    fn test_stagger_follows_index_not_event_order() {
        let (mut trigger, calls) = trigger_with(FakeObserver::default());
        let options = RevealOptions::new().stagger_step_ms(100);

        trigger.register(["a", "b", "c"], &options);
        trigger.handle_event(VisibilityEvent::visible(["c"]));
        trigger.handle_event(VisibilityEvent::visible(["a"]));

        assert_eq!(*calls.borrow(), vec![("c", 200), ("a", 0)]);
    }

    #[test]
    fn test_visible_hidden_visible_reveals_once() {
        let observer = FakeObserver::default();
        let watching = observer.watching.clone();
        let (mut trigger, calls) = trigger_with(observer);

        trigger.register(["hero"], &RevealOptions::default());
        assert_eq!(*watching.borrow(), vec!["hero"]);

        trigger.handle_event(VisibilityEvent::visible(["hero"]));
        trigger.handle_event(VisibilityEvent::hidden(["hero"]));
        trigger.handle_event(VisibilityEvent::visible(["hero"]));

        assert_eq!(calls.borrow().len(), 1);
        assert!(trigger.is_revealed(&"hero"));
        // no longer observed once revealed
        assert!(watching.borrow().is_empty());
    }

    #[test]
    fn test_unregistered_before_visible_never_reveals() {
        let observer = FakeObserver::default();
        let watching = observer.watching.clone();
        let (mut trigger, calls) = trigger_with(observer);

        trigger.register(["faq-1", "faq-2"], &RevealOptions::default());
        assert!(trigger.unregister(&"faq-1"));
        trigger.handle_event(VisibilityEvent::visible(["faq-1"]));

        assert!(calls.borrow().is_empty());
        assert_eq!(*watching.borrow(), vec!["faq-2"]);
        assert!(!trigger.unregister(&"faq-1"));
    }

    #[test]
    fn test_no_observation_capability_reveals_everything_now() {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut trigger = RevealTrigger::with_capability(None, move |key: &&'static str, delay| {
            sink.borrow_mut().push((*key, delay));
        });

        let options = RevealOptions::new().stagger_step_ms(150);
        let registered = trigger.register(["x", "y", "z"], &options);

        assert_eq!(registered, 3);
        assert_eq!(*calls.borrow(), vec![("x", 0), ("y", 0), ("z", 0)]);
        assert_eq!(trigger.pending(), 0);
    }

    #[test]
    fn test_partial_visibility_entries_are_ignored() {
        let (mut trigger, calls) = trigger_with(FakeObserver::default());
        trigger.register(["stat"], &RevealOptions::default());

        trigger.handle_event(VisibilityEvent::new(vec![VisibilityEntry::hidden("stat")]));
        assert!(calls.borrow().is_empty());
        assert_eq!(trigger.pending(), 1);
    }

    #[test]
    fn test_explicit_stagger_index_within_group() {
        let (mut trigger, calls) = trigger_with(FakeObserver::default());
        let options = RevealOptions::new().stagger_step_ms(50);

        // two sibling groups registered in one call
        trigger.register(
            [
                WatchedElement::new("tour-0").with_stagger_index(0),
                WatchedElement::new("tour-1").with_stagger_index(1),
                WatchedElement::new("cruise-0").with_stagger_index(0),
            ],
            &options,
        );
        trigger.handle_event(VisibilityEvent::visible(["tour-1", "cruise-0"]));

        assert_eq!(*calls.borrow(), vec![("tour-1", 50), ("cruise-0", 0)]);
    }

    #[test]
    fn test_config_drives_reveal_options() {
        let config = SiteConfig::from_json(r#"{"reveal":{"staggerStepMs":200}}"#).unwrap();
        let (mut trigger, calls) = trigger_with(FakeObserver::default());

        trigger.register(["a", "b"], &config.reveal);
        trigger.handle_event(VisibilityEvent::visible(["b"]));

        assert_eq!(*calls.borrow(), vec![("b", 200)]);
    }

    #[test]
    fn test_favorite_toggle_feeds_notification_queue() {
        let store = MemoryStore::new();
        let favorites = FavoritesStore::destinations(&store);
        let mut queue = NotificationQueue::new();

        let outcome = favorites.toggle("Kyoto").unwrap();
        queue.push(Notification::success(outcome.message()));
        let outcome = favorites.toggle("Kyoto").unwrap();
        queue.push(Notification::info(outcome.message()));

        let messages: Vec<_> = queue.items().map(|i| i.notification.message.clone()).collect();
        assert_eq!(messages, vec!["Added to favorites!", "Removed from favorites"]);
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn test_filter_round_trips_through_query_string() {
        let filter = DestinationFilter::from_query_pairs([("region", "europe"), ("season", "summer")]);
        let pairs = filter.to_query_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(
            DestinationFilter::from_query_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str()))),
            filter
        );
    }

    #[test]
    fn test_countdown_display_is_stable() {
        assert_eq!(Countdown::Expired.to_string(), "Offer Expired");
        assert_eq!(
            Countdown::Running {
                days: 10,
                hours: 0,
                minutes: 59,
                seconds: 1
            }
            .to_string(),
            "10d 0h 59m 1s"
        );
    }
}
