// File: src/dom.rs
// Purpose: Presentation-surface bindings (element lookup, error slots, visibility)

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use regform_validation::{Field, RegistrationForm};

/// Class applied to an input that failed validation
const INVALID_CLASS: &str = "invalid";
/// Class applied to an input that passed validation
const VALID_CLASS: &str = "valid";
/// Class that reveals an error slot
const VISIBLE_CLASS: &str = "visible";
/// Class that hides the form or the success container
const HIDDEN_CLASS: &str = "hidden";

/// A field's input element and its error-display slot
struct FieldSlots {
    input: HtmlInputElement,
    error: Element,
}

/// Handle to the fixed set of elements the form client manipulates
///
/// Every element in the collaborator contract is looked up once at
/// startup; a missing or mistyped element fails `attach`.
pub struct Surface {
    form: HtmlFormElement,
    success: Element,
    fields: HashMap<Field, FieldSlots>,
}

impl Surface {
    /// Look up the form, the success container, and every field's input
    /// and error slot by their stable ids.
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let form = lookup(document, "signup-form")?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| JsValue::from_str("#signup-form is not a <form>"))?;
        let success = lookup(document, "success-message")?;

        let mut fields = HashMap::new();
        for field in Field::ALL {
            let input = lookup(document, field.input_id())?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| {
                    JsValue::from_str(&format!("#{} is not an <input>", field.input_id()))
                })?;
            let error = lookup(document, field.error_id())?;
            fields.insert(field, FieldSlots { input, error });
        }

        Ok(Self {
            form,
            success,
            fields,
        })
    }

    fn slots(&self, field: Field) -> &FieldSlots {
        // Populated for every field in `attach`
        &self.fields[&field]
    }

    /// The input element for a field (for attaching listeners)
    pub fn input(&self, field: Field) -> &HtmlInputElement {
        &self.slots(field).input
    }

    /// The form element (for attaching the submit listener)
    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Read the current value of a field
    pub fn value(&self, field: Field) -> String {
        self.slots(field).input.value()
    }

    /// Snapshot all four field values for validation
    pub fn snapshot(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.value(Field::Name),
            email: self.value(Field::Email),
            password: self.value(Field::Password),
            confirm_password: self.value(Field::ConfirmPassword),
        }
    }

    /// Fill the field's error slot, reveal it, and mark the input invalid
    pub fn show_error(&self, field: Field, message: &str) -> Result<(), JsValue> {
        let slots = self.slots(field);
        slots.error.set_text_content(Some(message));
        slots.error.class_list().add_1(VISIBLE_CLASS)?;
        slots.input.class_list().add_1(INVALID_CLASS)?;
        slots.input.class_list().remove_1(VALID_CLASS)?;
        Ok(())
    }

    /// Empty the field's error slot, hide it, and mark the input valid
    ///
    /// Idempotent: clearing an already-clear field changes nothing.
    pub fn clear_error(&self, field: Field) -> Result<(), JsValue> {
        let slots = self.slots(field);
        slots.error.set_text_content(Some(""));
        slots.error.class_list().remove_1(VISIBLE_CLASS)?;
        slots.input.class_list().add_1(VALID_CLASS)?;
        slots.input.class_list().remove_1(INVALID_CLASS)?;
        Ok(())
    }

    /// Return a field to its neutral pre-interaction styling
    ///
    /// Like `clear_error` but also removes the valid marker, used when
    /// the whole form is reset after a successful submission.
    pub fn reset_field(&self, field: Field) -> Result<(), JsValue> {
        let slots = self.slots(field);
        slots.error.set_text_content(Some(""));
        slots.error.class_list().remove_1(VISIBLE_CLASS)?;
        slots.input.class_list().remove_1(VALID_CLASS)?;
        slots.input.class_list().remove_1(INVALID_CLASS)?;
        Ok(())
    }

    /// Swap the form out for the success message
    pub fn show_success(&self) -> Result<(), JsValue> {
        self.form.class_list().add_1(HIDDEN_CLASS)?;
        self.success.class_list().remove_1(HIDDEN_CLASS)?;
        Ok(())
    }

    /// Swap the success message back out for the form
    pub fn show_form(&self) -> Result<(), JsValue> {
        self.success.class_list().add_1(HIDDEN_CLASS)?;
        self.form.class_list().remove_1(HIDDEN_CLASS)?;
        Ok(())
    }

    /// Whether the form container is currently visible
    pub fn form_visible(&self) -> bool {
        !self.form.class_list().contains(HIDDEN_CLASS)
    }

    /// Clear all field values and error state back to the initial view
    pub fn reset(&self) -> Result<(), JsValue> {
        self.form.reset();
        for field in Field::ALL {
            self.reset_field(field)?;
        }
        Ok(())
    }
}

fn lookup(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}
