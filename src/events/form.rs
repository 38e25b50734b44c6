use crate::constants::CONTACT_FORM_ID;
use crate::feedback;
use gloo_timers::callback::Timeout;
use landing_core::{timer_millis, ContactController, Field, SubmitAttempt, SubmitHandler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A mounted contact form. Dropping it (or calling `teardown`) cancels the
/// pending success-banner reset.
pub struct ContactSection<H: SubmitHandler + 'static> {
    controller: Rc<ContactController<H>>,
    reset_timer: Rc<RefCell<Option<Timeout>>>,
    mounted: Rc<Cell<bool>>,
}

impl<H: SubmitHandler + 'static> ContactSection<H> {
    pub fn teardown(&self) {
        self.mounted.set(false);
        if self.reset_timer.borrow_mut().take().is_some() {
            log::info!("[contact] cancelled pending banner reset");
        }
    }
}

impl<H: SubmitHandler + 'static> Drop for ContactSection<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// The field an input event came from, keyed by the control's id.
fn read_edit(target: &web::EventTarget) -> Option<(Field, String)> {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        Field::from_name(&input.id()).map(|f| (f, input.value()))
    } else {
        let area = target.dyn_ref::<web::HtmlTextAreaElement>()?;
        Field::from_name(&area.id()).map(|f| (f, area.value()))
    }
}

pub fn mount_contact<H: SubmitHandler + 'static>(
    document: &web::Document,
    handler: H,
) -> anyhow::Result<ContactSection<H>> {
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTACT_FORM_ID))?;

    let section = ContactSection {
        controller: Rc::new(ContactController::new(handler)),
        reset_timer: Rc::new(RefCell::new(None)),
        mounted: Rc::new(Cell::new(true)),
    };

    wire_field_edits(document, &form, &section);
    wire_submit(document, &form, &section);
    feedback::render_form(document, &section.controller.state());
    log::info!("[contact] mounted");
    Ok(section)
}

fn wire_field_edits<H: SubmitHandler + 'static>(
    document: &web::Document,
    form: &web::Element,
    section: &ContactSection<H>,
) {
    for field in Field::ALL {
        if document.get_element_by_id(feedback::input_id(field)).is_none() {
            log::warn!("[contact] missing input for {}", field.as_str());
        }
    }
    // input events bubble, so one listener on the form covers every field
    let controller = section.controller.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some((field, value)) = ev.target().as_ref().and_then(read_edit) else {
            return;
        };
        let had_error = controller.state().error(field).is_some();
        controller.edit(field, value);
        if had_error {
            feedback::render_form(&doc, &controller.state());
        }
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_submit<H: SubmitHandler + 'static>(
    document: &web::Document,
    form: &web::Element,
    section: &ContactSection<H>,
) {
    let controller = section.controller.clone();
    let reset_timer = section.reset_timer.clone();
    let mounted = section.mounted.clone();
    let doc = document.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let pending = match controller.begin_submit() {
            Ok(pending) => pending,
            Err(SubmitAttempt::Ignored) => {
                log::debug!("[contact] submit already in flight");
                return;
            }
            Err(_) => {
                log::debug!("[contact] validation failed");
                feedback::render_form(&doc, &controller.state());
                return;
            }
        };
        // a fresh submit supersedes any running banner countdown
        reset_timer.borrow_mut().take();
        feedback::render_form(&doc, &controller.state());

        let controller = controller.clone();
        let reset_timer = reset_timer.clone();
        let mounted = mounted.clone();
        let doc = doc.clone();
        spawn_local(async move {
            let attempt = controller.finish_submit(pending).await;
            if !mounted.get() {
                log::debug!("[contact] resolved after teardown, skipping render");
                return;
            }
            match attempt {
                SubmitAttempt::Sent { reset_after } => {
                    log::info!("[contact] message sent");
                    let controller = controller.clone();
                    let doc_reset = doc.clone();
                    let timer = Timeout::new(timer_millis(reset_after), move || {
                        controller.tick(reset_after);
                        feedback::render_form(&doc_reset, &controller.state());
                    });
                    *reset_timer.borrow_mut() = Some(timer);
                }
                SubmitAttempt::Failed(e) => log::warn!("[contact] submission failed: {}", e),
                other => log::debug!("[contact] unexpected resolution {:?}", other),
            }
            feedback::render_form(&doc, &controller.state());
        });
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
