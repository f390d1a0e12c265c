//! Floating travel assistant chat window

use leptos::prelude::*;

use crate::core::chatbot::{ResponseTable, Transcript};
use crate::ui::config::use_site_config;
use crate::ui::icon::{Icon, icons};

const GREETING: &str = "Hi! I'm Jen's travel assistant. Ask me about cruises, tours, prices or booking.";

#[component]
pub fn ChatWidget() -> impl IntoView {
    let reply_delay_ms = use_site_config().timing.chat_reply_delay_ms;
    let responses = StoredValue::new(ResponseTable::travel_agency());
    let transcript = RwSignal::new({
        let mut t = Transcript::new();
        t.push_bot(GREETING);
        t
    });
    let open = RwSignal::new(false);
    let input = RwSignal::new(String::new());
    let typing = RwSignal::new(false);

    let send = move || {
        let mut sent = None;
        transcript.update(|t| sent = t.push_user(&input.get_untracked()));
        let Some(text) = sent else {
            return;
        };
        input.set(String::new());

        let reply = responses.with_value(|r| r.respond(&text).to_string());
        typing.set(true);

        #[cfg(feature = "csr")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(reply_delay_ms).await;
                let _ = typing.try_set(false);
                transcript.try_update(|t| t.push_bot(reply));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = reply_delay_ms;
            typing.set(false);
            transcript.update(|t| t.push_bot(reply));
        }
    };

    view! {
        <div class="chat-widget" class:open=move || open.get()>
            <button
                class="chat-toggle"
                aria-label="Open chat"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <Icon name=icons::CHAT />
            </button>

            <Show when=move || open.get()>
                <div class="chat-window">
                    <div class="chat-header">
                        <span>"Travel Assistant"</span>
                        <button class="chat-close" aria-label="Close chat" on:click=move |_| open.set(false)>
                            <Icon name=icons::X />
                        </button>
                    </div>

                    <div class="chat-messages">
                        {move || transcript.with(|t| {
                            t.messages()
                                .iter()
                                .map(|m| view! {
                                    <div class=format!("chat-message {}", m.sender.css_class())>
                                        {m.text.clone()}
                                    </div>
                                })
                                .collect_view()
                        })}
                        <Show when=move || typing.get()>
                            <div class="chat-message bot-message typing">"..."</div>
                        </Show>
                    </div>

                    <form class="chat-input" on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }>
                        <input
                            type="text"
                            placeholder="Type your message..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                        <button type="submit" aria-label="Send">
                            <Icon name=icons::SEND />
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
