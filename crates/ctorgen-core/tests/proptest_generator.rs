//! Property-based tests for generation
//!
//! Tests that skip directives hold for every pattern, that parameter order
//! follows declaration order, and that generation is deterministic.

use ctorgen_core::naming::{to_lower_initial, to_upper_initial};
use ctorgen_core::{Field, GenerationConfig, Generator, Pattern, StructModel};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct FieldSpec {
    exported: bool,
    ty: &'static str,
    skip_all: bool,
    skip_accessor: bool,
    skip_mutator: bool,
}

// Strategy: field with random visibility, type, and directives
fn arb_field() -> impl Strategy<Value = FieldSpec> {
    (
        any::<bool>(),
        prop::sample::select(vec![
            "int",
            "string",
            "[]byte",
            "map[string]int",
            "*Node",
            "time.Duration",
        ]),
        prop::bool::weighted(0.2),
        prop::bool::weighted(0.3),
        prop::bool::weighted(0.3),
    )
        .prop_map(
            |(exported, ty, skip_all, skip_accessor, skip_mutator)| FieldSpec {
                exported,
                ty,
                skip_all,
                skip_accessor,
                skip_mutator,
            },
        )
}

// Strategy: non-empty pattern subset
fn arb_patterns() -> impl Strategy<Value = Vec<Pattern>> {
    prop::sample::subsequence(Pattern::ALL.to_vec(), 1..=3)
}

/// Field names are `n<i>q` so no name is a substring of another.
fn field_name(index: usize, exported: bool) -> String {
    if exported {
        format!("N{index}q")
    } else {
        format!("n{index}q")
    }
}

fn tag_for(spec: &FieldSpec) -> String {
    let mut tokens = vec![r#"json:"x""#.to_string()];
    if spec.skip_all {
        tokens.push(r#"construction:"-""#.to_string());
    }
    if spec.skip_accessor {
        tokens.push(r#"construction:"getter:false""#.to_string());
    }
    if spec.skip_mutator {
        tokens.push(r#"construction:"setter:false""#.to_string());
    }
    tokens.join(" ")
}

fn build_model(specs: &[FieldSpec]) -> StructModel {
    specs
        .iter()
        .enumerate()
        .fold(StructModel::new("Sample", "sample"), |model, (i, spec)| {
            model.with_field(
                Field::new(field_name(i, spec.exported), spec.ty).with_tag(tag_for(spec)),
            )
        })
}

fn config(patterns: Vec<Pattern>) -> GenerationConfig {
    GenerationConfig::new("Sample")
        .with_patterns(patterns)
        .with_mutator_prefix("With")
        .with_accessors(true)
}

proptest! {
    /// Property: identical inputs give byte-identical output
    #[test]
    fn proptest_generation_is_deterministic(
        specs in prop::collection::vec(arb_field(), 0..12),
        patterns in arb_patterns(),
        by_value in any::<bool>(),
    ) {
        let model = build_model(&specs);
        let config = config(patterns).with_return_by_value(by_value);

        let first = Generator::new(&config, &model).generate().unwrap();
        let second = Generator::new(&config, &model).generate().unwrap();

        prop_assert_eq!(first, second);
    }

    /// Property: a fully skipped field never appears in any output
    #[test]
    fn proptest_skip_all_fields_never_appear(
        specs in prop::collection::vec(arb_field(), 1..12),
        patterns in arb_patterns(),
    ) {
        let model = build_model(&specs);
        let code = Generator::new(&config(patterns), &model).generate().unwrap();

        for (i, spec) in specs.iter().enumerate().filter(|(_, s)| s.skip_all) {
            let name = field_name(i, spec.exported);
            prop_assert!(!code.contains(&to_lower_initial(&name)), "{} leaked", name);
            prop_assert!(!code.contains(&to_upper_initial(&name)), "{} leaked", name);
        }
    }

    /// Property: setter-disabled fields get no mutator or option, but keep
    /// their accessor unless that is disabled too
    #[test]
    fn proptest_skip_mutator_fields_only_lose_construction(
        specs in prop::collection::vec(arb_field(), 1..12),
    ) {
        let model = build_model(&specs);
        let code = Generator::new(&config(Pattern::ALL.to_vec()), &model)
            .generate()
            .unwrap();

        for (i, spec) in specs.iter().enumerate() {
            let name = field_name(i, spec.exported);
            let upper = to_upper_initial(&name);
            let getter = format!("Get{upper}()");
            let constructs = !spec.skip_all && !spec.skip_mutator;
            let reads = !spec.skip_all && !spec.skip_accessor && !spec.exported;

            prop_assert_eq!(code.contains(&format!(") With{upper}(")), constructs);
            prop_assert_eq!(code.contains(&format!("func With{upper}(")), constructs);
            prop_assert_eq!(code.contains(&getter), reads);
        }
    }

    /// Property: all-args parameters follow declaration order with skipped
    /// fields filtered out
    #[test]
    fn proptest_all_args_parameters_follow_declaration_order(
        specs in prop::collection::vec(arb_field(), 0..12),
    ) {
        let model = build_model(&specs);
        let code = Generator::new(&config(vec![Pattern::AllArgs]), &model)
            .generate()
            .unwrap();

        let expected: Vec<String> = specs
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.skip_all && !s.skip_mutator)
            .map(|(i, s)| format!("{} {}", to_lower_initial(&field_name(i, s.exported)), s.ty))
            .collect();
        let signature = format!("func NewSample({}) *Sample {{", expected.join(", "));

        prop_assert!(code.contains(&signature), "missing {}", signature);
    }
}
