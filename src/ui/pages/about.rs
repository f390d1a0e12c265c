//! About page: story timeline, mission, stats and testimonials

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::favorites::ClickCounter;
use crate::core::navigation::{NavPage, is_activation_key};
use crate::ui::layout::PageHeader;
use crate::ui::reveal::use_scroll_reveal;
use crate::ui::scroll::use_page_analytics;
use crate::ui::storage::LocalStore;
use crate::ui::widgets::{CountUpStat, Testimonial, Testimonials};

const TIMELINE: [(&str, &str, &str); 4] = [
    ("2010", "The First Trip", "Jen plans a family cruise and friends start asking for help with theirs."),
    ("2014", "Going Independent", "Epic Adventures by Jen opens as a full-service agency."),
    ("2019", "Worldwide Partners", "Partnerships with major cruise lines and tour operators on six continents."),
    ("2024", "500+ Travelers", "Hundreds of happy clients and a growing list of repeat adventurers."),
];

const MISSION: [(&str, &str); 3] = [
    ("Personal", "Every itinerary starts with a conversation about how you like to travel."),
    ("Honest", "Clear pricing and straight answers, including when a deal is not worth it."),
    ("Supported", "Help before, during and after your trip, one phone call away."),
];

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Jen answered a call from us at midnight when our flight was cancelled. Lifesaver.",
            author: "Angela M.",
            trip: "Italy Tour",
        },
        Testimonial {
            quote: "Third trip with Jen and each one has been better than the last.",
            author: "Robert & Lynn",
            trip: "Caribbean Cruise",
        },
        Testimonial {
            quote: "She knew which excursions were worth it and which to skip.",
            author: "Keisha B.",
            trip: "Alaska Cruise",
        },
        Testimonial {
            quote: "Planning a reunion for 24 people sounded impossible. It wasn't.",
            author: "The Nguyen Family",
            trip: "All-Inclusive Resort",
        },
    ]
}

fn track_card(title: &str) {
    match ClickCounter::card_interactions(LocalStore::open()).record(title) {
        Ok(count) => leptos::logging::log!("card_click: mission-card '{}' ({})", title, count),
        Err(e) => leptos::logging::warn!("could not record card interaction: {}", e),
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    use_scroll_reveal();
    use_page_analytics(NavPage::About);

    view! {
        <Title text="About | Epic Adventures by Jen" />
        <PageHeader title="About Jen" subtitle="Travel planning with a personal touch" />

        <section class="story">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Our Story"</h2>
                <div class="timeline" data-reveal-stagger="150">
                    {TIMELINE.into_iter().map(|(year, title, text)| view! {
                        <div class="timeline-item" data-reveal="">
                            <span class="timeline-year">{year}</span>
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="mission">
            <div class="container mission-grid">
                {MISSION.into_iter().map(|(title, text)| view! {
                    <div
                        class="mission-card"
                        data-reveal=""
                        tabindex="0"
                        role="button"
                        on:click=move |_| track_card(title)
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if is_activation_key(&ev.key()) {
                                ev.prevent_default();
                                track_card(title);
                            }
                        }
                    >
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="stats">
            <div class="container stats-grid">
                <CountUpStat target=15 label="Years Planning Trips" />
                <CountUpStat target=500 suffix="+" label="Travelers Served" />
                <CountUpStat target=30 suffix="+" label="Countries Visited" />
            </div>
        </section>

        <section class="testimonials">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Kind Words"</h2>
                <Testimonials items=testimonials() />
            </div>
        </section>
    }
}
