//! Read-only accessors for private fields

use super::writer::GoWriter;
use crate::model::StructModel;
use crate::naming;

/// Emit `Get<Field>()` for every accessor field. Returns an empty string when
/// the struct has none.
pub fn emit(model: &StructModel) -> String {
    let receiver = naming::receiver_name(&model.type_name);
    let mut w = GoWriter::new();

    for (i, field) in model.accessor_fields().into_iter().enumerate() {
        if i > 0 {
            w.line(0, "");
        }
        let method = naming::accessor_name(&field.name);
        w.doc(format!("{method} returns the value of {}.", field.name));
        w.line(
            0,
            format!(
                "func ({receiver} *{}) {method}() {} {{",
                model.type_name, field.type_spelling
            ),
        );
        w.line(1, format!("return {receiver}.{}", field.name));
        w.line(0, "}");
    }

    w.finish()
}
