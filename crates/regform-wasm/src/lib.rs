//! Regform WASM client
//!
//! Binds the pure validation rules to the registration-form DOM:
//! live per-field validation on input, a submit gate over all four
//! fields, and the success view with its one-shot auto-revert.
//! The validators are also exported to JavaScript directly.

mod dom;

pub use dom::Surface;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event};

use regform_validation::{validators, Field, ValidationResult};

/// How long the success view stays up before the form returns, in ms
const SUCCESS_REVERT_MS: i32 = 2_000;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Attach the form client to the current document
///
/// Looks up every element in the collaborator contract and wires the
/// input and submit listeners. Call once after the module is loaded.
///
/// # Example (JavaScript)
/// ```javascript
/// import init, { mountSignupForm } from './pkg/regform_wasm.js';
/// await init();
/// mountSignupForm();
/// ```
#[wasm_bindgen(js_name = mountSignupForm)]
pub fn mount_signup_form() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    mount(&document)
}

/// Attach the form client to a specific document
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let surface = Rc::new(Surface::attach(document)?);
    bind(&surface)?;
    console::log_1(&"regform client mounted".into());
    Ok(())
}

/// Wire the per-field input listeners and the submit listener
///
/// Listeners live for the lifetime of the page, so their closures are
/// forgotten rather than kept.
fn bind(surface: &Rc<Surface>) -> Result<(), JsValue> {
    for field in Field::ALL {
        let listener_surface = Rc::clone(surface);
        let listener = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(err) = validate_live(&listener_surface, field) {
                console::error_2(&"live validation failed:".into(), &err);
            }
        }) as Box<dyn FnMut(Event)>);

        surface
            .input(field)
            .add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())?;
        listener.forget();
    }

    let submit_surface = Rc::clone(surface);
    let listener = Closure::wrap(Box::new(move |event: Event| {
        // No server to post to: the default action is always suppressed
        event.prevent_default();
        if let Err(err) = submit(&submit_surface) {
            console::error_2(&"submit handling failed:".into(), &err);
        }
    }) as Box<dyn FnMut(Event)>);

    surface
        .form()
        .add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
    listener.forget();

    Ok(())
}

/// Re-validate a single field on keystroke and update its error slot
fn validate_live(surface: &Surface, field: Field) -> Result<(), JsValue> {
    let result = surface.snapshot().validate_field(field);
    apply(surface, field, &result)
}

/// Validate the whole form; on success swap in the success view and
/// schedule the revert
fn submit(surface: &Rc<Surface>) -> Result<(), JsValue> {
    let report = surface.snapshot().validate();
    for field in Field::ALL {
        apply(surface, field, report.result(field))?;
    }

    if !report.is_valid() {
        return Ok(());
    }

    surface.show_success()?;
    schedule_revert(surface)
}

fn apply(surface: &Surface, field: Field, result: &ValidationResult) -> Result<(), JsValue> {
    if result.valid {
        surface.clear_error(field)
    } else {
        surface.show_error(field, &result.message)
    }
}

/// One-shot timer that brings the form back after the success view
///
/// Not cancellable, and cannot overlap itself: a fresh submit requires
/// the form to be visible again.
fn schedule_revert(surface: &Rc<Surface>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let surface = Rc::clone(surface);
    let callback = Closure::once(move || {
        if let Err(err) = revert(&surface) {
            console::error_2(&"form revert failed:".into(), &err);
        }
    });

    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        SUCCESS_REVERT_MS,
    )?;
    callback.forget();

    Ok(())
}

/// Restore the editing view: empty fields, neutral styling, form visible
fn revert(surface: &Surface) -> Result<(), JsValue> {
    surface.reset()?;
    surface.show_form()
}

// ---------------------------------------------------------------------------
// JS-facing validators
// ---------------------------------------------------------------------------

/// Validate a name value
///
/// Returns `{ valid, message }`; `message` is empty when valid.
#[wasm_bindgen(js_name = validateName)]
pub fn validate_name_js(value: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&validators::validate_name(
        value,
    ))?)
}

/// Validate an email value
#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(value: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&validators::validate_email(
        value,
    ))?)
}

/// Validate a password value
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(value: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(
        &validators::validate_password(value),
    )?)
}

/// Validate a confirm-password value against the current password
#[wasm_bindgen(js_name = validateConfirmPassword)]
pub fn validate_confirm_password_js(password: &str, confirm: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(
        &validators::validate_confirm_password(password, confirm),
    )?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validators::validate_email(email).valid
}
