//! Form field components with inline error messages

use leptos::prelude::*;

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|err| view! { <span class="error-message" role="alert">{err}</span> })}
    }
}

/// Text input with label
#[component]
pub fn FormField(
    /// Field name, also used as the input id
    name: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, date, number)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Validate when the field loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group" class:error=move || error.get().is_some()>
            <label for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    name: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 5)]
    rows: u32,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group" class:error=move || error.get().is_some()>
            <label for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
            />
            <FieldError error=error />
        </div>
    }
}

/// Select with `(value, text)` options
#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));

    view! {
        <div class="form-group" class:error=move || error.get().is_some()>
            <label for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <select
                id=name
                name=name
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    name: &'static str,
    label: &'static str,
    checked: Signal<bool>,
    on_change: Callback<bool>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group checkbox-group" class:error=move || error.get().is_some()>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    name=name
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <span>{label}</span>
            </label>
            <FieldError error=error />
        </div>
    }
}
