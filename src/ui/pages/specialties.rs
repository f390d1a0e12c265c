//! Specialties page: service cards with interaction tracking and skill bars

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::favorites::ClickCounter;
use crate::core::navigation::NavPage;
use crate::ui::layout::PageHeader;
use crate::ui::reveal::{use_reveal_callback, use_scroll_reveal};
use crate::ui::scroll::use_page_analytics;
use crate::ui::storage::LocalStore;
use crate::ui::widgets::CountUpStat;

const SPECIALTIES: [(&str, &str); 6] = [
    ("Ocean Cruises", "Caribbean, Mediterranean, Alaska and transatlantic sailings."),
    ("River Cruises", "Slow travel along the Danube, Rhine and Seine."),
    ("Disney Vacations", "Parks, resorts and Disney Cruise Line, with dining and FastPass planning."),
    ("Guided Tours", "Escorted tours through Europe, Asia and South America."),
    ("Honeymoons", "Romantic escapes with the extras already arranged."),
    ("Group Travel", "Reunions, weddings and clubs, coordinated end to end."),
];

const EXPERTISE: [(&str, u8); 4] = [
    ("Cruise Planning", 98),
    ("Theme Parks", 95),
    ("European Tours", 90),
    ("Destination Weddings", 85),
];

/// Horizontal bar that fills to `percent` when scrolled into view
#[component]
fn SkillBar(label: &'static str, percent: u8) -> impl IntoView {
    let filled = RwSignal::new(false);
    let key = use_reveal_callback("skill", move || {
        let _ = filled.try_set(true);
    });

    view! {
        <div class="skill" data-reveal-key=key>
            <div class="skill-label">
                <span>{label}</span>
                <span>{percent}"%"</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", if filled.get() { percent } else { 0 })
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn SpecialtiesPage() -> impl IntoView {
    use_scroll_reveal();
    use_page_analytics(NavPage::Specialties);

    let track = |name: &'static str| {
        match ClickCounter::card_interactions(LocalStore::open()).record(name) {
            Ok(count) => leptos::logging::log!("card '{}' opened {} times", name, count),
            Err(e) => leptos::logging::warn!("could not record card interaction: {}", e),
        }
    };

    view! {
        <Title text="Specialties | Epic Adventures by Jen" />
        <PageHeader title="Our Specialties" subtitle="The trips we know inside and out" />

        <section class="specialties">
            <div class="container specialties-grid">
                {SPECIALTIES.into_iter().map(|(title, text)| view! {
                    <div
                        class="specialty-card"
                        data-reveal=""
                        tabindex="0"
                        on:click=move |_| track(title)
                    >
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="expertise">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Expertise"</h2>
                {EXPERTISE.into_iter().map(|(label, percent)| view! {
                    <SkillBar label=label percent=percent />
                }).collect_view()}
            </div>
        </section>

        <section class="stats">
            <div class="container stats-grid">
                <CountUpStat target=200 suffix="+" label="Cruises Booked" />
                <CountUpStat target=120 suffix="+" label="Disney Trips" />
                <CountUpStat target=40 suffix="+" label="Groups Hosted" />
            </div>
        </section>
    }
}
