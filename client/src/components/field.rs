//! Labelled form controls bound to one string field of a draft signal.
//!
//! DESIGN
//! ======
//! Forms keep a single `RwSignal<Draft>`. `bind!(draft, field)` projects one
//! `String` field into a `Binding` (a read signal plus a setter) so the
//! controls below stay generic over the draft type.

use leptos::prelude::*;

use crate::util::catalog::Choice;

/// Read/write handle for one text field of a form draft.
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub set: Callback<String>,
}

/// `bind!(draft, field)` builds a `Binding` for `draft.field`.
macro_rules! bind {
    ($draft:expr, $field:ident) => {{
        let draft = $draft;
        $crate::components::field::Binding {
            value: ::leptos::prelude::Signal::derive(move || {
                ::leptos::prelude::With::with(&draft, |d| d.$field.clone())
            }),
            set: ::leptos::prelude::Callback::new(move |value: String| {
                ::leptos::prelude::Update::update(&draft, |d| d.$field = value);
            }),
        }
    }};
}
pub(crate) use bind;

#[component]
pub fn TextField(
    label: &'static str,
    binding: Binding,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] min: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label} {required.then_some(" *")}</span>
            <input
                class="field__input"
                type=kind
                placeholder=placeholder
                required=required
                step=step
                min=min
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    binding: Binding,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--area"
                placeholder=placeholder
                rows=rows
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `<select>` over a fixed catalog. `prompt` adds a leading empty option.
#[component]
pub fn SelectField(
    label: &'static str,
    binding: Binding,
    options: &'static [Choice],
    #[prop(optional)] prompt: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label} {required.then_some(" *")}</span>
            <select
                class="field__input"
                required=required
                on:change=move |ev| binding.set.run(event_target_value(&ev))
            >
                {prompt
                    .map(|text| {
                        view! {
                            <option value="" selected=move || binding.value.get().is_empty()>
                                {text}
                            </option>
                        }
                    })}
                {options
                    .iter()
                    .map(|choice| {
                        view! {
                            <option value=choice.value selected=move || binding.value.get() == choice.value>
                                {choice.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
