//! Web Share with a clipboard fallback
//!
//! Both APIs are probed on `navigator` at call time; browsers without
//! either get [`ShareOutcome::Unavailable`].

use crate::core::share::{SharePayload, ShareOutcome};

/// URL of the current page, empty outside the browser
pub fn current_url() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Share `payload` natively, or copy its text to the clipboard
pub async fn share(payload: SharePayload) -> ShareOutcome {
    #[cfg(feature = "csr")]
    {
        web::share(payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        ShareOutcome::Unavailable
    }
}

#[cfg(feature = "csr")]
mod web {
    use super::*;
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn method(target: &JsValue, name: &str) -> Option<Function> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    async fn call(target: &JsValue, f: &Function, arg: &JsValue) -> Result<JsValue, JsValue> {
        let promise: Promise = f.call1(target, arg)?.dyn_into()?;
        JsFuture::from(promise).await
    }

    fn share_data(payload: &SharePayload) -> Result<JsValue, JsValue> {
        let data = Object::new();
        Reflect::set(&data, &"title".into(), &payload.title.as_str().into())?;
        Reflect::set(&data, &"text".into(), &payload.text.as_str().into())?;
        Reflect::set(&data, &"url".into(), &payload.url.as_str().into())?;
        Ok(data.into())
    }

    pub async fn share(payload: SharePayload) -> ShareOutcome {
        let Some(navigator) = web_sys::window().map(|w| JsValue::from(w.navigator())) else {
            return ShareOutcome::Unavailable;
        };

        if let Some(share) = method(&navigator, "share") {
            let result = match share_data(&payload) {
                Ok(data) => call(&navigator, &share, &data).await,
                Err(err) => Err(err),
            };
            return match result {
                Ok(_) => ShareOutcome::Shared,
                Err(err) => {
                    leptos::logging::log!("share dismissed: {:?}", err);
                    ShareOutcome::Cancelled
                }
            };
        }

        let Some(clipboard) = Reflect::get(&navigator, &"clipboard".into())
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
        else {
            return ShareOutcome::Unavailable;
        };
        let Some(write_text) = method(&clipboard, "writeText") else {
            return ShareOutcome::Unavailable;
        };
        match call(&clipboard, &write_text, &payload.clipboard_text().into()).await {
            Ok(_) => ShareOutcome::Copied,
            Err(err) => {
                leptos::logging::warn!("clipboard write failed: {:?}", err);
                ShareOutcome::Unavailable
            }
        }
    }
}
