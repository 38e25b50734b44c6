use crate::constants::*;
use crate::dom;
use landing_core::{Field, FormState};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    dom::set_class(el, HIDDEN_CLASS, false);
    // fallback for environments without CSS class
    _ = el.set_attribute("style", "");
}

#[inline]
pub fn hide(el: &web::Element) {
    dom::set_class(el, HIDDEN_CLASS, true);
    // fallback
    _ = el.set_attribute("style", "display:none");
}

pub fn input_id(field: Field) -> &'static str {
    match field {
        Field::Name => NAME_INPUT_ID,
        Field::Email => EMAIL_INPUT_ID,
        Field::Message => MESSAGE_INPUT_ID,
    }
}

fn set_field_value(document: &web::Document, field: Field, value: &str) {
    let Some(el) = document.get_element_by_id(input_id(field)) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        if input.value() != value {
            input.set_value(value);
        }
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        if area.value() != value {
            area.set_value(value);
        }
    }
}

/// Bring the contact form's DOM in line with `state`.
pub fn render_form(document: &web::Document, state: &FormState) {
    for field in Field::ALL {
        set_field_value(document, field, state.values.get(field));

        let error = state.error(field);
        if let Some(input) = document.get_element_by_id(input_id(field)) {
            dom::set_class(&input, INVALID_CLASS, error.is_some());
        }
        let error_id = format!("{}{}", input_id(field), ERROR_ID_SUFFIX);
        if let Some(slot) = document.get_element_by_id(&error_id) {
            match error {
                Some(e) => {
                    slot.set_text_content(Some(&e.to_string()));
                    show(&slot);
                }
                None => {
                    slot.set_text_content(None);
                    hide(&slot);
                }
            }
        }
    }

    if let Some(button) = document
        .get_element_by_id(CONTACT_SUBMIT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(state.is_submitting());
        let label = if state.is_submitting() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        };
        button.set_text_content(Some(label));
    }

    if let Some(banner) = document.get_element_by_id(CONTACT_SUCCESS_ID) {
        if state.is_submitted() {
            show(&banner);
        } else {
            hide(&banner);
        }
    }
}
