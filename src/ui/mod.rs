pub mod chatbot;
pub mod common;
pub mod config;
pub mod contact_form;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod share;
pub mod storage;
pub mod widgets;

pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, provide_notifications, use_notifications};
pub use reveal::{provide_reveal_context, use_scroll_reveal};
pub use scroll::{ScrollContext, provide_scroll_context, use_page_analytics, use_scroll_context};
