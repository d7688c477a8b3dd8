use crate::core::{ParamField, RenderParams};
use crate::dom;
use web_sys as web;

/// Reflect the drift-updated targets back into the slider elements so the
/// controls track the ambient motion. Segments is shown rounded; the store
/// keeps the fractional value.
pub fn sync_sliders(document: &web::Document, target: &RenderParams) {
    for field in ParamField::ALL {
        if let Some(input) = dom::input_element(document, field.id()) {
            let mut value = target.get(field) as f64;
            if field == ParamField::Segments {
                value = value.round();
            }
            input.set_value_as_number(value);
        }
    }
}
