//! Interactive page widgets: hero slider, FAQ accordion, testimonials,
//! statistic counters and offer countdowns

use leptos::prelude::*;

use crate::core::accordion::Accordion;
use crate::core::carousel::{Carousel, PagedWindow};
use crate::core::countdown::{Countdown, TICK_MS, parse_deadline};
use crate::core::counter::CountUp;
use crate::ui::config::use_site_config;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal;

#[derive(Clone, Debug)]
pub struct Slide {
    pub title: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

/// Restartable autoplay: each `start` invalidates the previous loop
#[derive(Clone, Copy)]
struct Autoplay {
    generation: RwSignal<u64>,
    interval_ms: u32,
}

impl Autoplay {
    fn new(interval_ms: u32) -> Self {
        Self {
            generation: RwSignal::new(0),
            interval_ms,
        }
    }

    fn stop(&self) {
        self.generation.update(|g| *g += 1);
    }

    /// (Re)start ticking `tick` every interval
    fn start(&self, tick: impl Fn() + 'static) {
        self.stop();
        #[cfg(feature = "csr")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let generation = self.generation;
            let Some(mine) = generation.try_get_untracked() else {
                return;
            };
            let interval_ms = self.interval_ms;
            spawn_local(async move {
                loop {
                    TimeoutFuture::new(interval_ms).await;
                    // stopped, restarted or disposed
                    if generation.try_get_untracked() != Some(mine) {
                        break;
                    }
                    tick();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (tick, self.interval_ms);
        }
    }
}

#[component]
pub fn HeroSlider(slides: Vec<Slide>) -> impl IntoView {
    let config = use_site_config();
    let carousel = RwSignal::new(Carousel::new(slides.len()));
    let autoplay = Autoplay::new(config.timing.carousel_autoplay_ms);

    let advance = move || {
        carousel.try_update(|c| {
            c.next();
        });
    };
    autoplay.start(advance);

    // manual navigation restarts autoplay
    let navigate = move |f: fn(&mut Carousel)| {
        carousel.update(|c| f(c));
        autoplay.start(advance);
    };

    let dots = (0..slides.len())
        .map(|i| {
            view! {
                <button
                    class="dot"
                    class:active=move || carousel.get().is_active(i)
                    aria-label=format!("Go to slide {}", i + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            c.go_to(i);
                        });
                        autoplay.start(advance);
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <section
            class="hero"
            on:mouseenter=move |_| autoplay.stop()
            on:mouseleave=move |_| autoplay.start(advance)
        >
            <div class="hero-slider">
                {slides.into_iter().enumerate().map(|(i, slide)| view! {
                    <div
                        class="slide"
                        class:active=move || carousel.get().is_active(i)
                        style=format!("background-image: url('{}')", slide.image)
                    >
                        <div class="slide-content">
                            <h1>{slide.title}</h1>
                            <p>{slide.text}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
            <button class="hero-prev" aria-label="Previous slide" on:click=move |_| navigate(|c| { c.prev(); })>
                <Icon name=icons::CHEVRON_LEFT />
            </button>
            <button class="hero-next" aria-label="Next slide" on:click=move |_| navigate(|c| { c.next(); })>
                <Icon name=icons::CHEVRON_RIGHT />
            </button>
            <div class="slider-dots">{dots}</div>
        </section>
    }
}

/// Exclusive FAQ accordion
#[component]
pub fn FaqList(items: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new());

    view! {
        <div class="faq-list" data-reveal-stagger="100">
            {items.into_iter().enumerate().map(|(i, (question, answer))| {
                let is_open = move || accordion.get().is_open(i);
                view! {
                    <div class="faq-item" class:active=is_open data-reveal="">
                        <button
                            class="faq-question"
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| accordion.update(|a| {
                                a.toggle(i);
                            })
                        >
                            <span>{question}</span>
                            <Icon name=icons::CHEVRON_DOWN class="icon faq-icon" />
                        </button>
                        <div class="faq-answer">
                            <p>{answer}</p>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[derive(Clone, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub trip: &'static str,
}

/// Shows `page_size` testimonials at a time, rotating on the autoplay interval
#[component]
pub fn Testimonials(
    items: Vec<Testimonial>,
    #[prop(default = 3)] page_size: usize,
) -> impl IntoView {
    let config = use_site_config();
    let window = RwSignal::new(PagedWindow::new(items.len(), page_size));

    if window.get_untracked().needs_rotation() {
        let autoplay = Autoplay::new(config.timing.carousel_autoplay_ms);
        autoplay.start(move || {
            window.try_update(|w| w.advance());
        });
    }

    view! {
        <div class="testimonials-grid">
            {items.into_iter().enumerate().map(|(i, t)| view! {
                <blockquote class="testimonial-card" class:hidden=move || !window.get().is_visible(i)>
                    <p class="testimonial-text">{t.quote}</p>
                    <footer>
                        <strong>{t.author}</strong>
                        <span>{t.trip}</span>
                    </footer>
                </blockquote>
            }).collect_view()}
        </div>
    }
}

/// Number that counts up from zero the first time it scrolls into view
#[component]
pub fn CountUpStat(
    target: u64,
    label: &'static str,
    #[prop(default = "")] suffix: &'static str,
) -> impl IntoView {
    let config = use_site_config();
    let counter = CountUp::new(target)
        .duration_ms(config.counter.duration_ms)
        .frame_ms(config.counter.frame_ms);
    let value = RwSignal::new(0u64);
    let key = reveal::use_reveal_callback("stat", move || animate(counter, value));

    view! {
        <div class="stat-item" data-reveal-key=key>
            <span class="stat-number">{move || value.get()}{suffix}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

fn animate(counter: CountUp, value: RwSignal<u64>) {
    #[cfg(feature = "csr")]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        let frames: Vec<u64> = counter.frames().collect();
        let frame_ms = counter.frame_interval_ms();
        spawn_local(async move {
            for frame in frames {
                TimeoutFuture::new(frame_ms).await;
                // disposed
                if value.try_set(frame).is_some() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    value.set(counter.target());
}

/// Live "Xd Xh Xm Xs" countdown to an offer deadline
#[component]
pub fn CountdownTimer(deadline: &'static str) -> impl IntoView {
    let Some(end) = parse_deadline(deadline) else {
        leptos::logging::warn!("invalid countdown deadline '{}'", deadline);
        return view! { <span class="countdown"></span> }.into_any();
    };

    let remaining = RwSignal::new(Countdown::remaining(end, chrono::Utc::now()));

    #[cfg(feature = "csr")]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            loop {
                TimeoutFuture::new(TICK_MS).await;
                let now = chrono::Utc::now();
                if remaining.try_set(Countdown::remaining(end, now)).is_some() {
                    break;
                }
                if remaining.try_get_untracked().is_none_or(|c| c.is_expired()) {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = TICK_MS;

    view! {
        <span class="countdown" class:expired=move || remaining.get().is_expired()>
            {move || remaining.get().to_string()}
        </span>
    }
    .into_any()
}
