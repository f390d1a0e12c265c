//! Contact page enquiry form

use std::collections::HashMap;

use leptos::prelude::*;

use crate::core::validation::{
    FieldError, FieldRule, FieldValue, contact_form_rules, validate_field, validate_form,
    validate_travel_date,
};
use crate::ui::common::form::{CheckboxField, FormField, SelectField, TextAreaField};
use crate::ui::notifications::use_notifications;

const SENT_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";
const INVALID_MESSAGE: &str = "Please correct the errors in the form";

/// Simulated send time; there is no backend
const SEND_DELAY_MS: u32 = 1500;

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Rule check plus the past-date check for the travel date
fn check(name: &str, value: &FieldValue, rule: &FieldRule) -> Result<(), FieldError> {
    validate_field(name, value, rule)?;
    if let ("travelDates", FieldValue::Text(date)) = (name, value) {
        validate_travel_date(date, today())?;
    }
    Ok(())
}

fn select_options(placeholder: &str, options: &[(&str, &str)]) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(options.iter().map(|(v, t)| (v.to_string(), t.to_string())))
        .collect()
}

#[derive(Clone, Copy)]
struct FormState {
    values: RwSignal<HashMap<String, FieldValue>>,
    errors: RwSignal<HashMap<String, String>>,
    rules: StoredValue<Vec<(&'static str, FieldRule)>>,
}

impl FormState {
    fn new() -> Self {
        Self {
            values: RwSignal::new(HashMap::new()),
            errors: RwSignal::new(HashMap::new()),
            rules: StoredValue::new(contact_form_rules()),
        }
    }

    fn text(&self, name: &'static str) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || match values.with(|v| v.get(name).cloned()) {
            Some(FieldValue::Text(text)) => text,
            _ => String::new(),
        })
    }

    fn checked(&self, name: &'static str) -> Signal<bool> {
        let values = self.values;
        Signal::derive(move || matches!(values.with(|v| v.get(name).cloned()), Some(FieldValue::Checked(true))))
    }

    fn error(&self, name: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(name).cloned()))
    }

    fn validate(&self, name: &'static str) {
        let value = self
            .values
            .with_untracked(|v| v.get(name).cloned())
            .unwrap_or_else(|| FieldValue::text(""));
        let Some(rule) = self
            .rules
            .with_value(|rules| rules.iter().find(|(n, _)| *n == name).map(|(_, r)| r.clone()))
        else {
            return;
        };
        let result = check(name, &value, &rule);
        self.errors.update(|errors| match result {
            Ok(()) => {
                errors.remove(name);
            }
            Err(e) => {
                errors.insert(name.to_string(), e.message);
            }
        });
    }

    /// Store a new value; a field already in error is re-checked immediately
    fn set(&self, name: &'static str, value: FieldValue) {
        self.values.update(|v| {
            v.insert(name.to_string(), value);
        });
        if self.errors.with_untracked(|e| e.contains_key(name)) {
            self.validate(name);
        }
    }

    fn on_text(&self, name: &'static str) -> Callback<String> {
        let state = *self;
        Callback::new(move |value: String| state.set(name, FieldValue::Text(value)))
    }

    fn on_blur(&self, name: &'static str) -> Callback<()> {
        let state = *self;
        Callback::new(move |_| state.validate(name))
    }

    /// Validate every field; returns true when the form can be sent
    fn validate_all(&self) -> bool {
        let mut values = self.values.get_untracked();
        let failures = self.rules.with_value(|rules| {
            for (name, _) in rules {
                values
                    .entry(name.to_string())
                    .or_insert_with(|| if *name == "terms" { FieldValue::Checked(false) } else { FieldValue::text("") });
            }
            let mut failures = validate_form(rules, &values);
            if let Some(FieldValue::Text(date)) = values.get("travelDates") {
                if !failures.iter().any(|f| f.field == "travelDates") {
                    if let Err(e) = validate_travel_date(date, today()) {
                        failures.push(e);
                    }
                }
            }
            failures
        });

        self.errors.set(
            failures
                .iter()
                .map(|f| (f.field.clone(), f.message.clone()))
                .collect(),
        );
        failures.is_empty()
    }

    fn reset(&self) {
        self.values.set(HashMap::new());
        self.errors.set(HashMap::new());
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let notifications = use_notifications();
    let form = FormState::new();
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        if !form.validate_all() {
            notifications.error(INVALID_MESSAGE);
            return;
        }

        sending.set(true);
        let destination = form.text("destination").get_untracked();
        let budget = form.text("budget").get_untracked();
        leptos::logging::log!("contact form submitted: destination={}, budget={}", destination, budget);

        #[cfg(feature = "csr")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(SEND_DELAY_MS).await;
                if sending.try_set(false).is_some() {
                    return;
                }
                notifications.success(SENT_MESSAGE);
                form.reset();
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = SEND_DELAY_MS;
            sending.set(false);
            notifications.success(SENT_MESSAGE);
            form.reset();
        }
    };

    let destinations = select_options(
        "Select a destination",
        &[
            ("caribbean-cruise", "Caribbean Cruise"),
            ("mediterranean-cruise", "Mediterranean Cruise"),
            ("alaska-cruise", "Alaska Cruise"),
            ("europe-tour", "European Tour"),
            ("asia-tour", "Asian Adventure"),
            ("disney", "Disney Vacation"),
            ("all-inclusive", "All-Inclusive Resort"),
            ("other", "Other / Not sure yet"),
        ],
    );
    let budgets = select_options(
        "Select your budget",
        &[
            ("under-2000", "Under $2,000"),
            ("2000-5000", "$2,000 - $5,000"),
            ("5000-10000", "$5,000 - $10,000"),
            ("over-10000", "Over $10,000"),
        ],
    );

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-row">
                <FormField
                    name="firstName" label="First Name" required=true
                    value=form.text("firstName") on_input=form.on_text("firstName")
                    on_blur=form.on_blur("firstName") error=form.error("firstName")
                />
                <FormField
                    name="lastName" label="Last Name" required=true
                    value=form.text("lastName") on_input=form.on_text("lastName")
                    on_blur=form.on_blur("lastName") error=form.error("lastName")
                />
            </div>
            <div class="form-row">
                <FormField
                    name="email" label="Email" required=true input_type="email"
                    value=form.text("email") on_input=form.on_text("email")
                    on_blur=form.on_blur("email") error=form.error("email")
                />
                <FormField
                    name="phone" label="Phone" required=true input_type="tel"
                    placeholder="229-456-9188"
                    value=form.text("phone") on_input=form.on_text("phone")
                    on_blur=form.on_blur("phone") error=form.error("phone")
                />
            </div>
            <SelectField
                name="destination" label="Destination" required=true
                value=form.text("destination")
                on_change=Callback::new(move |v: String| {
                    form.set("destination", FieldValue::Text(v));
                    form.validate("destination");
                })
                options=destinations
                error=form.error("destination")
            />
            <div class="form-row">
                <FormField
                    name="travelDates" label="Travel Date" required=true input_type="date"
                    value=form.text("travelDates") on_input=form.on_text("travelDates")
                    on_blur=form.on_blur("travelDates") error=form.error("travelDates")
                />
                <FormField
                    name="travelers" label="Travelers" required=true input_type="number"
                    value=form.text("travelers") on_input=form.on_text("travelers")
                    on_blur=form.on_blur("travelers") error=form.error("travelers")
                />
            </div>
            <SelectField
                name="budget" label="Budget" required=true
                value=form.text("budget")
                on_change=Callback::new(move |v: String| {
                    form.set("budget", FieldValue::Text(v));
                    form.validate("budget");
                })
                options=budgets
                error=form.error("budget")
            />
            <TextAreaField
                name="message" label="Tell us about your dream trip" required=true
                value=form.text("message") on_input=form.on_text("message")
                on_blur=form.on_blur("message") error=form.error("message")
            />
            <CheckboxField
                name="terms" label="I agree to the terms and conditions"
                checked=form.checked("terms")
                on_change=Callback::new(move |checked: bool| {
                    form.set("terms", FieldValue::Checked(checked));
                    form.validate("terms");
                })
                error=form.error("terms")
            />
            <button type="submit" class="btn btn-primary" class:loading=move || sending.get() disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
