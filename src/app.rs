use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::chatbot::ChatWidget;
use crate::ui::config::{load_site_config, provide_site_config};
use crate::ui::layout::{BackToTop, Footer, Navbar, ScrollProgress};
use crate::ui::notifications::{NotificationsContainer, provide_notifications};
use crate::ui::pages::{
    AboutPage, ContactPage, DestinationsPage, HomePage, NotFoundPage, PromotionsPage,
    SpecialtiesPage,
};
use crate::ui::reveal::provide_reveal_context;
use crate::ui::scroll::provide_scroll_context;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = load_site_config();
    provide_site_config(config.clone());
    provide_reveal_context(config.reveal.clone());
    provide_scroll_context(config.timing.scroll_throttle_ms);
    provide_notifications(config.notifications.max_visible, config.notifications.dismiss_ms);

    view! {
        <Title text="Epic Adventures by Jen" />

        <Router>
            <ScrollProgress />
            <Navbar />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/destinations") view=DestinationsPage />
                    <Route path=path!("/specialties") view=SpecialtiesPage />
                    <Route path=path!("/promotions") view=PromotionsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
            <BackToTop />
            <ChatWidget />
            <NotificationsContainer />
        </Router>
    }
}
