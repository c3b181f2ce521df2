//! # Forms: registration, login, personal data, medical background
//!
//! Every form is split the same way: a record holding the field values, a
//! field enum generated by [`fields::record_fields!`], a `submit_*` function
//! that validates and talks to the backend, and a Dioxus component that binds
//! inputs to the record and calls the submit function.
//!
//! | Component | Record | Submit | Requests |
//! |-----------|--------|--------|----------|
//! | [`LoginForm`] | [`api::Credentials`] | [`submit_login`] | `POST /api/login` |
//! | [`RegisterForm`] | [`api::Registration`] | [`submit_registration`] | `POST /api/register` |
//! | [`FileForm`] | [`api::PersonalData`] | [`submit_personal_data`] | `POST /api/personal_data` |
//! | [`BackgroundForm`] | [`BackgroundDraft`] | [`submit_background`] | `POST /api/backgrounds`, then `POST /api/personal_data` |
//!
//! The submit functions are generic over [`api::Transport`] so they run
//! against the scripted transport in tests.

use std::time::Duration;

use api::Sex;
use dioxus::prelude::*;

mod fields;

mod background;
mod file_form;
mod login;
mod register;

pub use background::{
    submit_background, BackgroundDraft, BackgroundEdit, BackgroundForm, FamilyCondition,
    GynecologicalField, Habit, InterviewField, NonPathologicalField, PathologicalField,
};
pub use file_form::{submit_personal_data, FileForm, PersonalField, MISSING_REQUIRED};
pub use login::{submit_login, LoginField, LoginForm};
pub use register::{submit_registration, RegisterField, RegisterForm};

/// Where to go once a form has been accepted, and how long to wait first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub after: Duration,
}

/// `<select>` over the backend's sex values, with an empty "choose" option.
#[component]
pub fn SexSelect(
    id: String,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            name: "sex",
            class: "form-select",
            value: "{value}",
            required: required,
            disabled: disabled,
            onchange: move |evt: FormEvent| on_change.call(evt.value()),
            option { value: "", "Selecciona" }
            for sex in Sex::ALL {
                option {
                    value: sex.value(),
                    selected: value == sex.value(),
                    {sex.label()}
                }
            }
        }
    }
}
