//! Promotions page: deal cards, countdowns, sharing and newsletter signup
//!
//! Cards are focusable; Enter or Space on a card books it like its button.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::favorites::{ClickCounter, FavoriteToggle, FavoritesStore, NewsletterList, Subscription};
use crate::core::navigation::{NavPage, is_activation_key};
use crate::core::share::{SharePayload, ShareOutcome};
use crate::core::validation::is_valid_email;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageHeader;
use crate::ui::notifications::use_notifications;
use crate::ui::reveal::use_scroll_reveal;
use crate::ui::scroll::use_page_analytics;
use crate::ui::share::current_url;
#[cfg(feature = "csr")]
use crate::ui::share::share;
use crate::ui::storage::LocalStore;
use crate::ui::widgets::CountdownTimer;

struct Promotion {
    title: &'static str,
    discount: &'static str,
    text: &'static str,
    ends: &'static str,
}

const PROMOTIONS: [Promotion; 4] = [
    Promotion {
        title: "Caribbean Cruise Sale",
        discount: "30% OFF",
        text: "Seven nights in the Eastern Caribbean with a free balcony upgrade.",
        ends: "2026-12-31T23:59:59",
    },
    Promotion {
        title: "Disney Family Package",
        discount: "Free Dining",
        text: "Book five nights at a Disney resort and dining is on the house.",
        ends: "2026-11-30",
    },
    Promotion {
        title: "European River Cruise",
        discount: "$1,000 OFF",
        text: "Per couple savings on spring sailings along the Danube and Rhine.",
        ends: "2027-02-28",
    },
    Promotion {
        title: "Early Bird Alaska",
        discount: "Kids Sail Free",
        text: "Lock in next summer's glacier cruise before prices rise.",
        ends: "2027-01-15",
    },
];

const FEATURED_ENDS: &str = "2026-12-31T23:59:59Z";

#[component]
fn NewsletterForm() -> impl IntoView {
    let notifications = use_notifications();
    let email = RwSignal::new(String::new());
    let invalid = move || email.with(|e| !e.trim().is_empty() && !is_valid_email(e));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let list = NewsletterList::new(LocalStore::open());
        match list.subscribe(&email.get_untracked()) {
            Ok(outcome @ Subscription::Subscribed) => {
                notifications.success(outcome.message());
                email.set(String::new());
            }
            Ok(outcome @ Subscription::AlreadySubscribed) => notifications.info(outcome.message()),
            Ok(outcome @ Subscription::InvalidEmail) => notifications.error(outcome.message()),
            Err(e) => {
                leptos::logging::warn!("newsletter signup not saved: {}", e);
                notifications.error("Sorry, we couldn't save your subscription. Please try again.");
            }
        }
    };

    view! {
        <section class="newsletter-section" data-reveal="">
            <div class="container">
                <h2>"Never Miss a Deal"</h2>
                <p>"Exclusive offers straight to your inbox."</p>
                <form id="newsletter-form" class="newsletter-form" novalidate=true on:submit=on_submit>
                    <input
                        id="newsletter-email"
                        type="email"
                        placeholder="Your email address"
                        class:invalid=invalid
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Subscribe"</button>
                </form>
            </div>
        </section>
    }
}

#[component]
pub fn PromotionsPage() -> impl IntoView {
    use_scroll_reveal();
    use_page_analytics(NavPage::Promotions);

    let notifications = use_notifications();
    let favorites = RwSignal::new(FavoritesStore::promotions(LocalStore::open()).list());

    let toggle_favorite = move |title: &'static str| {
        let store = FavoritesStore::promotions(LocalStore::open());
        match store.toggle(title) {
            Ok(outcome) => {
                favorites.set(store.list());
                match outcome {
                    FavoriteToggle::Added => notifications.success(outcome.message()),
                    FavoriteToggle::Removed => notifications.info(outcome.message()),
                }
            }
            Err(e) => {
                leptos::logging::warn!("could not save favorite promotion: {}", e);
                notifications.error("Could not save your favorites in this browser");
            }
        }
    };

    let track_click = |title: &'static str| {
        match ClickCounter::promotion_clicks(LocalStore::open()).record(title) {
            Ok(_) => leptos::logging::log!("promotion clicked: {}", title),
            Err(e) => leptos::logging::warn!("could not record promotion click: {}", e),
        }
    };

    let navigate = use_navigate();
    let book = move |title: &'static str| {
        track_click(title);
        navigate(NavPage::Contact.path(), Default::default());
    };

    let share_promotion = move |title: &'static str| {
        let payload = SharePayload::promotion(title, &current_url());
        let report = move |outcome: ShareOutcome| match (outcome, outcome.message()) {
            (ShareOutcome::Copied, Some(message)) => notifications.success(message),
            (_, Some(message)) => notifications.error(message),
            (_, None) => {}
        };

        #[cfg(feature = "csr")]
        wasm_bindgen_futures::spawn_local(async move {
            report(share(payload).await);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, report);
        }
    };

    view! {
        <Title text="Promotions | Epic Adventures by Jen" />
        <PageHeader title="Special Promotions" subtitle="Limited-time deals hand-picked by Jen" />

        <section class="featured-deal" data-reveal="">
            <div class="container">
                <span class="badge">"Featured"</span>
                <h2>"Holiday Cruise Extravaganza"</h2>
                <p>"Up to 40% off select holiday sailings. Offer ends in "<CountdownTimer deadline=FEATURED_ENDS /></p>
            </div>
        </section>

        <section class="promotions">
            <div class="container promotions-grid">
                {PROMOTIONS.into_iter().enumerate().map(|(index, promo)| {
                    let title = promo.title;
                    let is_favorite = move || favorites.with(|f| f.iter().any(|p| p == title));
                    let book = book.clone();
                    view! {
                        <div
                            class="promotion-card"
                            data-reveal=""
                            tabindex="0"
                            role="article"
                            aria-label=format!("Promotion {}", index + 1)
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                // keys pressed on the card's own buttons stay with them
                                if ev.target() == ev.current_target() && is_activation_key(&ev.key()) {
                                    ev.prevent_default();
                                    book(title);
                                }
                            }
                        >
                            <div class="card-header">
                                <span class="discount">{promo.discount}</span>
                                <button
                                    class="share-btn"
                                    aria-label="Share promotion"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                        share_promotion(title);
                                    }
                                >
                                    <Icon name=icons::SHARE />
                                </button>
                                <button
                                    class="favorite-btn"
                                    class:favorited=is_favorite
                                    aria-label="Add to favorites"
                                    on:click=move |_| toggle_favorite(title)
                                >
                                    {move || if is_favorite() {
                                        view! { <Icon name=icons::HEART_FILLED /> }
                                    } else {
                                        view! { <Icon name=icons::HEART /> }
                                    }}
                                </button>
                            </div>
                            <h3>{title}</h3>
                            <p>{promo.text}</p>
                            <p class="offer-ends">"Ends in "<CountdownTimer deadline=promo.ends /></p>
                            <a href="/contact" class="btn btn-outline" on:click=move |_| track_click(title)>
                                "Book Now"
                            </a>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>

        <NewsletterForm />

        <section class="return-message" data-reveal="">
            <div class="container">
                <p>"Don't see what you're looking for? "<A href="/contact">"Ask Jen"</A>" about unadvertised deals."</p>
            </div>
        </section>
    }
}
