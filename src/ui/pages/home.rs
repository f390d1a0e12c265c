//! Home page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::navigation::NavPage;
use crate::ui::reveal::use_scroll_reveal;
use crate::ui::scroll::use_page_analytics;
use crate::ui::widgets::{CountUpStat, HeroSlider, Slide, Testimonial, Testimonials};

fn slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Sail Into Adventure",
            text: "Caribbean, Mediterranean and Alaskan cruises planned around you.",
            image: "/images/hero-cruise.jpg",
        },
        Slide {
            title: "Tours Worth Remembering",
            text: "Guided journeys through Europe, Asia and beyond.",
            image: "/images/hero-tour.jpg",
        },
        Slide {
            title: "Magic for the Whole Family",
            text: "Disney vacations with every detail handled.",
            image: "/images/hero-disney.jpg",
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Jen planned every detail of our anniversary cruise. We just showed up and enjoyed it.",
            author: "Maria & Tom",
            trip: "Mediterranean Cruise",
        },
        Testimonial {
            quote: "Our kids still talk about Disney. Jen found perks we never knew existed.",
            author: "The Walker Family",
            trip: "Walt Disney World",
        },
        Testimonial {
            quote: "Japan in cherry blossom season, perfectly paced. Worth every penny.",
            author: "Denise R.",
            trip: "Asian Adventure",
        },
        Testimonial {
            quote: "Fast answers, honest advice and a better price than we found online.",
            author: "Chris P.",
            trip: "Alaska Cruise",
        },
    ]
}

const SERVICES: [(&str, &str); 3] = [
    ("Cruises", "Ocean and river cruises on every major line, with cabin picks that fit how you travel."),
    ("Tours", "Small-group and private tours with trusted local guides."),
    ("Custom Trips", "Honeymoons, reunions and bucket-list journeys designed from scratch."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    use_scroll_reveal();
    use_page_analytics(NavPage::Home);

    view! {
        <Title text="Epic Adventures by Jen | Travel Agency" />

        <HeroSlider slides=slides() />

        <section class="services">
            <div class="container">
                <h2 class="section-title" data-reveal="">"How We Travel"</h2>
                <div class="services-grid">
                    {SERVICES.into_iter().map(|(title, text)| view! {
                        <div class="service-card" data-reveal="">
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="stats">
            <div class="container stats-grid">
                <CountUpStat target=500 suffix="+" label="Happy Travelers" />
                <CountUpStat target=50 suffix="+" label="Destinations" />
                <CountUpStat target=15 label="Years of Experience" />
                <CountUpStat target=100 suffix="%" label="Satisfaction" />
            </div>
        </section>

        <section class="testimonials">
            <div class="container">
                <h2 class="section-title" data-reveal="">"What Travelers Say"</h2>
                <Testimonials items=testimonials() />
            </div>
        </section>

        <section class="cta">
            <div class="container" data-reveal="">
                <h2>"Ready for your next adventure?"</h2>
                <A href="/contact" attr:class="btn btn-primary">"Start Planning"</A>
            </div>
        </section>
    }
}
