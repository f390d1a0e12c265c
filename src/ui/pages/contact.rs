//! Contact page: enquiry form, contact details and FAQ

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::navigation::NavPage;
use crate::ui::contact_form::ContactForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{EMAIL, PageHeader, PHONE};
use crate::ui::reveal::use_scroll_reveal;
use crate::ui::scroll::use_page_analytics;
use crate::ui::widgets::FaqList;

fn faq() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Do you charge a planning fee?",
         "Most cruises and packages carry no fee; suppliers pay our commission. Fully custom itineraries have a small planning fee credited toward your booking."),
        ("How far ahead should I book?",
         "Six to twelve months gives the best choice of cabins and rooms, but we regularly plan last-minute getaways too."),
        ("Can you help with travel insurance?",
         "Yes. We will walk you through the options and recommend coverage that fits your trip."),
        ("What if something goes wrong during my trip?",
         "Call or text us any time. We handle rebooking and changes so you can keep enjoying your vacation."),
    ]
}

#[component]
pub fn ContactPage() -> impl IntoView {
    use_scroll_reveal();
    use_page_analytics(NavPage::Contact);

    view! {
        <Title text="Contact | Epic Adventures by Jen" />
        <PageHeader title="Contact Us" subtitle="Let's plan your next adventure together" />

        <section class="contact">
            <div class="container contact-grid">
                <div class="contact-info" data-reveal="">
                    <h2>"Get in Touch"</h2>
                    <p><Icon name=icons::PHONE />" "<a href=format!("tel:{PHONE}")>{PHONE}</a></p>
                    <p><Icon name=icons::MAIL />" "<a href=format!("mailto:{EMAIL}")>{EMAIL}</a></p>
                    <p>"We usually reply within 24 hours."</p>
                </div>
                <div class="contact-form-wrapper" data-reveal="">
                    <ContactForm />
                </div>
            </div>
        </section>

        <section class="faq">
            <div class="container">
                <h2 class="section-title" data-reveal="">"Frequently Asked Questions"</h2>
                <FaqList items=faq() />
            </div>
        </section>
    }
}
