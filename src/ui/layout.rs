//! Site chrome: navbar, page header, footer and scroll helpers

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::navigation::{NavMenu, NavPage};
use crate::core::scroll::HEADER_PARALLAX_RATE;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::{scroll_to_top, use_scroll_context};

pub const PHONE: &str = "229-456-9188";
pub const EMAIL: &str = "epicadventuresbyjen@gmail.com";

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = use_scroll_context();
    let location = use_location();
    let active = Memo::new(move |_| NavPage::from_path(&location.pathname.get()));
    let menu = RwSignal::new(NavMenu::default());

    // following a link closes the mobile menu
    Effect::new(move |_| {
        location.pathname.track();
        menu.update(|m| m.close());
    });

    view! {
        <nav
            id="navbar"
            class="navbar"
            class:scrolled=move || scroll.navbar.get().scrolled
            class:nav-hidden=move || scroll.navbar.get().hidden && !menu.get().is_open()
        >
            <div class="nav-container">
                <A href="/" attr:class="nav-logo">
                    <span class="logo-text">"Epic Adventures"</span>
                    <span class="logo-sub">"by Jen"</span>
                </A>

                <ul id="nav-menu" class="nav-menu" class:active=move || menu.get().is_open()>
                    {NavPage::all().into_iter().map(|page| {
                        view! {
                            <li class="nav-item">
                                <A
                                    href=page.path()
                                    attr:class=move || {
                                        if active.get() == Some(page) { "nav-link active" } else { "nav-link" }
                                    }
                                >
                                    {page.label()}
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <button
                    id="hamburger"
                    class="hamburger"
                    class:active=move || menu.get().is_open()
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| {
                        m.toggle();
                    })
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

/// Page banner with a parallax background
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let scroll = use_scroll_context();
    let transform = move || {
        let offset = scroll.metrics.get().parallax_offset(HEADER_PARALLAX_RATE);
        format!("transform: translateY({offset}px)")
    };

    view! {
        <header class="page-header">
            <div class="page-header-bg" style=transform></div>
            <div class="page-header-content">
                <h1 data-reveal="">{title}</h1>
                <p data-reveal="">{subtitle}</p>
            </div>
        </header>
    }
}

/// Thin bar at the top of the viewport showing reading progress
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = use_scroll_context().reading_progress();

    view! {
        <div class="scroll-progress" style=move || format!("width: {:.1}%", progress.get())></div>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = use_scroll_context().back_to_top_visible();

    view! {
        <button
            class="back-to-top"
            class:visible=move || visible.get()
            aria-label="Back to top"
            on:click=move |_| scroll_to_top()
        >
            <Icon name=icons::ARROW_UP />
        </button>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content" data-reveal-stagger="100">
                <div class="footer-section" data-reveal="">
                    <h3>"Epic Adventures by Jen"</h3>
                    <p>"Cruises, tours and custom journeys planned with care."</p>
                </div>
                <div class="footer-section" data-reveal="">
                    <h4>"Explore"</h4>
                    <ul>
                        {NavPage::all().into_iter().map(|page| view! {
                            <li><A href=page.path()>{page.label()}</A></li>
                        }).collect_view()}
                    </ul>
                </div>
                <div class="footer-section" data-reveal="">
                    <h4>"Contact"</h4>
                    <p><Icon name=icons::PHONE />" "<a href=format!("tel:{PHONE}")>{PHONE}</a></p>
                    <p><Icon name=icons::MAIL />" "<a href=format!("mailto:{EMAIL}")>{EMAIL}</a></p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2025 Epic Adventures by Jen. All rights reserved."</p>
            </div>
        </footer>
    }
}
