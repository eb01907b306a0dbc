//! Builder: `<T>Builder` with one chained mutator per constructor field

use super::writer::{GoWriter, Target};
use crate::config::GenerationConfig;
use crate::model::StructModel;
use crate::naming;

const RECEIVER: &str = "b";

/// Emit the builder type, its constructor, mutators, and `Build()`.
///
/// Fields without a mutator are unreachable through the builder and stay at
/// their zero value in built instances.
pub fn emit(model: &StructModel, config: &GenerationConfig) -> String {
    let target = Target::new(config);
    let fields = model.constructor_fields();
    let builder = format!("{}Builder", target.name);
    let prefix = config.mutator_prefix.as_deref();

    let mut w = GoWriter::new();

    w.doc(format!("{builder} builds a {} step by step.", target.name));
    if fields.is_empty() {
        w.line(0, format!("type {builder} struct{{}}"));
    } else {
        w.line(0, format!("type {builder} struct {{"));
        let rows: Vec<(String, String)> = fields
            .iter()
            .map(|f| (f.name.clone(), f.type_spelling.clone()))
            .collect();
        w.aligned(1, &rows, "");
        w.line(0, "}");
    }

    w.line(0, "");
    w.doc(format!("New{builder} creates an empty {builder}."));
    w.line(0, format!("func New{builder}() *{builder} {{"));
    w.line(1, format!("return &{builder}{{}}"));
    w.line(0, "}");

    let reserved = [RECEIVER, target.name, builder.as_str()];
    for field in &fields {
        let method = naming::mutator_name(prefix, &field.name);
        let param = naming::param_name(&field.name, &reserved);
        w.line(0, "");
        w.doc(format!("{method} sets {}.", field.name));
        w.line(
            0,
            format!(
                "func ({RECEIVER} *{builder}) {method}({param} {}) *{builder} {{",
                field.type_spelling
            ),
        );
        w.line(1, format!("{RECEIVER}.{} = {param}", field.name));
        w.line(1, format!("return {RECEIVER}"));
        w.line(0, "}");
    }

    w.line(0, "");
    w.doc(format!(
        "Build creates a {} from the values set on the builder.",
        target.name
    ));
    w.line(
        0,
        format!(
            "func ({RECEIVER} *{builder}) Build() {} {{",
            target.return_type()
        ),
    );
    let values: Vec<(String, String)> = fields
        .iter()
        .map(|f| (f.name.clone(), format!("{RECEIVER}.{}", f.name)))
        .collect();
    target.write_instance(&mut w, 1, &values);
    target.write_finish(&mut w, 1);
    w.line(0, "}");
    w.finish()
}
