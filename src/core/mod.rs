//! Core site logic: scroll reveal, page widgets and their state machines
//!
//! Everything here is browser-agnostic and runs under the native test
//! harness; `ui` binds it to the DOM.

pub mod accordion;
pub mod analytics;
pub mod carousel;
pub mod catalog;
pub mod chatbot;
pub mod config;
pub mod countdown;
pub mod counter;
pub mod favorites;
pub mod navigation;
pub mod notification;
pub mod reveal;
pub mod scroll;
pub mod share;
pub mod storage;
pub mod timing;
pub mod validation;
#[cfg(test)]
mod tests;

pub use accordion::Accordion;
pub use analytics::{PageAnalytics, PageVisit, VisitSummary};
pub use carousel::{Carousel, PagedWindow};
pub use catalog::{Destination, DestinationFilter, FilterOutcome, SortOrder};
pub use chatbot::{ChatMessage, ResponseTable, Sender, Transcript};
pub use config::{ConfigError, SiteConfig};
pub use countdown::Countdown;
pub use counter::CountUp;
pub use favorites::{ClickCounter, FavoriteToggle, FavoritesStore, NewsletterList, Subscription};
pub use navigation::{NavMenu, NavPage};
pub use notification::{Notification, NotificationItem, NotificationKind, NotificationQueue};
pub use reveal::{
    RevealError, RevealOptions, RevealState, RevealTrigger, RootMargin, SiblingGroup,
    VisibilityEntry, VisibilityEvent, VisibilityObserver, WatchedElement,
};
pub use scroll::{NavbarState, NavbarTracker, ScrollDepth, ScrollMetrics};
pub use share::{SharePayload, ShareOutcome};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use timing::{Debounce, FrameGate, Throttle};
pub use validation::{FieldError, FieldErrorKind, FieldRule, FieldValue};
