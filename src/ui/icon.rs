use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file under /icons without .svg)
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped with the site
pub mod icons {
    pub const ARROW_UP: &str = "arrow-up";
    pub const CHAT: &str = "chat";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const HEART: &str = "heart";
    pub const HEART_FILLED: &str = "heart-filled";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const SEND: &str = "send";
    pub const SHARE: &str = "share";
    pub const X: &str = "x";
}
