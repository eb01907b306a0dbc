//! All-args constructor: `New<T>(a A, b B, ...)`

use super::writer::{GoWriter, INSTANCE_VAR, Target};
use crate::config::GenerationConfig;
use crate::model::StructModel;
use crate::naming;

/// Emit `New<T>` taking every constructor field positionally, in declaration order.
pub fn emit(model: &StructModel, config: &GenerationConfig) -> String {
    let target = Target::new(config);
    let fields = model.constructor_fields();
    let reserved = [INSTANCE_VAR, target.name];

    let params: Vec<(String, &str, &str)> = fields
        .iter()
        .map(|f| {
            (
                naming::param_name(&f.name, &reserved),
                f.type_spelling.as_str(),
                f.name.as_str(),
            )
        })
        .collect();

    let signature = params
        .iter()
        .map(|(param, ty, _)| format!("{param} {ty}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut w = GoWriter::new();
    let ctor = format!("New{}", target.name);
    w.doc(format!("{ctor} creates a new {}.", target.name));
    w.line(
        0,
        format!("func {ctor}({signature}) {} {{", target.return_type()),
    );
    let values: Vec<(String, String)> = params
        .iter()
        .map(|(param, _, field)| (field.to_string(), param.clone()))
        .collect();
    target.write_instance(&mut w, 1, &values);
    target.write_finish(&mut w, 1);
    w.line(0, "}");
    w.finish()
}
