//! Wires the contact form DOM to the core state machine and fakes the
//! submission round trip with timers.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{ContactForm, Field, SubmitOutcome, SubmitStatus};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{STATUS_CLEAR_MS, SUBMIT_LATENCY_MS};
use crate::dom;

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let form = Rc::new(RefCell::new(ContactForm::default()));

    for field in Field::ALL {
        wire_input(document, &form, field)?;
    }

    let form_el = document
        .get_element_by_id("contact-form")
        .ok_or_else(|| anyhow::anyhow!("missing #contact-form"))?;
    let document_submit = document.clone();
    let form_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        on_submit(&document_submit, &form_submit);
    }) as Box<dyn FnMut(_)>);
    let _ = form_el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

fn wire_input(
    document: &web::Document,
    form: &Rc<RefCell<ContactForm>>,
    field: Field,
) -> anyhow::Result<()> {
    let el = document
        .get_element_by_id(field.id())
        .ok_or_else(|| anyhow::anyhow!("missing #{}", field.id()))?;
    let document = document.clone();
    let form = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        let value = input_value(&target);
        form.borrow_mut().input(field, &value);
        render_field_error(&document, &form.borrow(), field);
    }) as Box<dyn FnMut(web::Event)>);
    let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

fn input_value(target: &web::EventTarget) -> String {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn on_submit(document: &web::Document, form: &Rc<RefCell<ContactForm>>) {
    let outcome = form.borrow_mut().submit();
    render_all(document, &form.borrow());

    match outcome {
        SubmitOutcome::Accepted => {
            // Pretend the message is in flight, then land it.
            let document = document.clone();
            let form = form.clone();
            if let Some(w) = web::window() {
                dom::set_timeout(&w, SUBMIT_LATENCY_MS, move || {
                    form.borrow_mut().complete_submission();
                    render_all(&document, &form.borrow());
                    sync_inputs(&document, &form.borrow());
                    schedule_status_clear(&document, &form);
                });
            }
        }
        SubmitOutcome::Rejected => {
            log::info!(
                "[contact] rejected submission with {} field error(s)",
                form.borrow().error_count()
            );
            schedule_status_clear(document, form);
        }
    }
}

fn schedule_status_clear(document: &web::Document, form: &Rc<RefCell<ContactForm>>) {
    let document = document.clone();
    let form = form.clone();
    if let Some(w) = web::window() {
        dom::set_timeout(&w, STATUS_CLEAR_MS, move || {
            form.borrow_mut().clear_status();
            render_status(&document, &form.borrow());
        });
    }
}

fn render_all(document: &web::Document, form: &ContactForm) {
    render_status(document, form);
    for field in Field::ALL {
        render_field_error(document, form, field);
    }
}

fn render_status(document: &web::Document, form: &ContactForm) {
    let Some(el) = document.get_element_by_id("form-status") else {
        return;
    };
    match form.status() {
        SubmitStatus::Idle => el.set_inner_html(""),
        SubmitStatus::Success => el.set_inner_html(
            "<div class='toast toast-success' role='alert'>Message sent successfully!</div>",
        ),
        SubmitStatus::Error => el.set_inner_html(
            "<div class='toast toast-error' role='alert'>\
             Failed to send message. Please try again.</div>",
        ),
    }
}

fn render_field_error(document: &web::Document, form: &ContactForm, field: Field) {
    if let Some(el) = document.get_element_by_id(&format!("{}-error", field.id())) {
        el.set_inner_html(form.error(field).unwrap_or(""));
    }
}

/// Push cleared values back into the inputs after a completed submission.
fn sync_inputs(document: &web::Document, form: &ContactForm) {
    for field in Field::ALL {
        let Some(el) = document.get_element_by_id(field.id()) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(form.value(field));
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_value(form.value(field));
        }
    }
}
