//! Site configuration lookup in the browser

use leptos::prelude::*;

use crate::core::config::SiteConfig;
#[cfg(feature = "csr")]
use crate::core::config::CONFIG_ELEMENT_ID;

/// Read `<script type="application/json" id="site-config">`, falling back
/// to the defaults when it is missing or invalid.
pub fn load_site_config() -> SiteConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(raw) = raw {
            match SiteConfig::from_json(&raw) {
                Ok(config) => return config,
                Err(e) => leptos::logging::warn!("ignoring site configuration: {}", e),
            }
        }
    }
    SiteConfig::default()
}

pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Configured values, or the defaults outside the app shell
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
