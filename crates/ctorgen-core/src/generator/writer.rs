//! Line-oriented Go source writer with gofmt-style indentation and alignment

use crate::config::GenerationConfig;

/// Name of the local holding a freshly built instance
pub(crate) const INSTANCE_VAR: &str = "v";

/// Accumulates Go source, one line at a time
#[derive(Debug, Default)]
pub(crate) struct GoWriter {
    buf: String,
}

impl GoWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Write a line indented by `indent` tabs
    pub(crate) fn line(&mut self, indent: usize, text: impl AsRef<str>) {
        for _ in 0..indent {
            self.buf.push('\t');
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Write a top-level `//` doc comment
    pub(crate) fn doc(&mut self, text: impl AsRef<str>) {
        self.line(0, format!("// {}", text.as_ref()));
    }

    /// Write rows whose second column is aligned, the way gofmt aligns
    /// struct fields and composite-literal values.
    ///
    /// Each row is written as `<left><padding> <right><suffix>`.
    pub(crate) fn aligned(&mut self, indent: usize, rows: &[(String, String)], suffix: &str) {
        let width = rows
            .iter()
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or(0);
        for (left, right) in rows {
            self.line(indent, format!("{left:<width$} {right}{suffix}"));
        }
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

/// The struct being constructed, as seen by every pattern
#[derive(Debug, Clone, Copy)]
pub(crate) struct Target<'a> {
    pub(crate) name: &'a str,
    pub(crate) by_value: bool,
    pub(crate) init_hook: Option<&'a str>,
}

impl<'a> Target<'a> {
    pub(crate) fn new(config: &'a GenerationConfig) -> Self {
        Self {
            name: &config.type_name,
            by_value: config.return_by_value,
            init_hook: config.init_hook.as_deref(),
        }
    }

    /// `*T`, or `T` when returning by value
    pub(crate) fn return_type(&self) -> String {
        if self.by_value {
            self.name.to_string()
        } else {
            format!("*{}", self.name)
        }
    }

    /// Composite-literal prefix: `&T` or `T`
    pub(crate) fn literal(&self) -> String {
        if self.by_value {
            self.name.to_string()
        } else {
            format!("&{}", self.name)
        }
    }

    /// Expression yielding a `*T` to the instance local
    pub(crate) fn instance_pointer(&self) -> String {
        if self.by_value {
            format!("&{INSTANCE_VAR}")
        } else {
            INSTANCE_VAR.to_string()
        }
    }

    /// Write `v := <literal>{...}` assigning each `(field, expr)` pair
    pub(crate) fn write_instance(&self, w: &mut GoWriter, indent: usize, values: &[(String, String)]) {
        if values.is_empty() {
            w.line(indent, format!("{INSTANCE_VAR} := {}{{}}", self.literal()));
            return;
        }
        w.line(indent, format!("{INSTANCE_VAR} := {}{{", self.literal()));
        let rows: Vec<(String, String)> = values
            .iter()
            .map(|(field, expr)| (format!("{field}:"), expr.clone()))
            .collect();
        w.aligned(indent + 1, &rows, ",");
        w.line(indent, "}");
    }

    /// Write the init hook call (if configured) and `return v`
    pub(crate) fn write_finish(&self, w: &mut GoWriter, indent: usize) {
        if let Some(hook) = self.init_hook {
            w.line(indent, format!("{INSTANCE_VAR}.{hook}()"));
        }
        w.line(indent, format!("return {INSTANCE_VAR}"));
    }
}
