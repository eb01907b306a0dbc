//! Functional options: `<T>Option` and `New<T>WithOptions(opts ...)`

use super::writer::{GoWriter, INSTANCE_VAR, Target};
use crate::config::GenerationConfig;
use crate::model::StructModel;
use crate::naming;

/// Emit the option type, one `With<Field>` per constructor field, and the
/// variadic constructor applying options in call order.
pub fn emit(model: &StructModel, config: &GenerationConfig) -> String {
    let target = Target::new(config);
    let option = format!("{}Option", target.name);

    let mut w = GoWriter::new();

    w.doc(format!("{option} configures a {}.", target.name));
    w.line(0, format!("type {option} func(*{})", target.name));

    let reserved = [INSTANCE_VAR, target.name, option.as_str()];
    for field in model.constructor_fields() {
        let func = naming::option_name(&field.name);
        let param = naming::param_name(&field.name, &reserved);
        w.line(0, "");
        w.doc(format!("{func} sets {}.", field.name));
        w.line(
            0,
            format!("func {func}({param} {}) {option} {{", field.type_spelling),
        );
        w.line(1, format!("return func({INSTANCE_VAR} *{}) {{", target.name));
        w.line(2, format!("{INSTANCE_VAR}.{} = {param}", field.name));
        w.line(1, "}");
        w.line(0, "}");
    }

    let ctor = format!("New{}WithOptions", target.name);
    w.line(0, "");
    w.doc(format!(
        "{ctor} creates a new {} and applies opts in order.",
        target.name
    ));
    w.line(
        0,
        format!(
            "func {ctor}(opts ...{option}) {} {{",
            target.return_type()
        ),
    );
    target.write_instance(&mut w, 1, &[]);
    w.line(1, "for _, opt := range opts {");
    w.line(2, format!("opt({})", target.instance_pointer()));
    w.line(1, "}");
    target.write_finish(&mut w, 1);
    w.line(0, "}");
    w.finish()
}
