//! Naming convention utilities for Go code generation.
//!
//! Go decides visibility by the case of an identifier's first character, so
//! every derived name here only ever flips that one character.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `Name` | [`to_lower_initial`] | `name` |
//! | `httpClient` | [`to_upper_initial`] | `HttpClient` |
//! | `instanceID` | [`accessor_name`] | `GetInstanceID` |
//! | `port` | [`option_name`] | `WithPort` |
//! | `Type` | [`param_name`] | `type_` |

/// Prefix of every generated accessor
pub const ACCESSOR_PREFIX: &str = "Get";

/// Prefix of every generated option function
pub const OPTION_PREFIX: &str = "With";

/// Go reserved words; none of them can be used as a parameter name.
const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Lower-case the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use ctorgen_core::naming::to_lower_initial;
///
/// assert_eq!(to_lower_initial("Name"), "name");
/// assert_eq!(to_lower_initial("HTTPClient"), "hTTPClient");
/// assert_eq!(to_lower_initial(""), "");
/// ```
pub fn to_lower_initial(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Upper-case the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use ctorgen_core::naming::to_upper_initial;
///
/// assert_eq!(to_upper_initial("name"), "Name");
/// assert_eq!(to_upper_initial("httpClient"), "HttpClient");
/// assert_eq!(to_upper_initial(""), "");
/// ```
pub fn to_upper_initial(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Whether a Go identifier is exported.
pub fn is_exported(ident: &str) -> bool {
    ident.chars().next().is_some_and(char::is_uppercase)
}

const PREDECLARED_TYPES: [&str; 22] = [
    "any",
    "bool",
    "byte",
    "comparable",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Whether `ident` names one of Go's predeclared types.
pub fn is_predeclared_type(ident: &str) -> bool {
    PREDECLARED_TYPES.contains(&ident)
}

/// Whether `ident` is a Go keyword.
pub fn is_keyword(ident: &str) -> bool {
    GO_KEYWORDS.contains(&ident)
}

/// Accessor method name for a field: `Get` + upper-initial field name.
pub fn accessor_name(field: &str) -> String {
    format!("{ACCESSOR_PREFIX}{}", to_upper_initial(field))
}

/// Builder mutator name for a field: optional prefix + upper-initial field name.
pub fn mutator_name(prefix: Option<&str>, field: &str) -> String {
    format!("{}{}", prefix.unwrap_or_default(), to_upper_initial(field))
}

/// Option function name for a field: `With` + upper-initial field name.
pub fn option_name(field: &str) -> String {
    format!("{OPTION_PREFIX}{}", to_upper_initial(field))
}

/// Parameter name for a field.
///
/// Lower-initial field name, suffixed with `_` until it is neither a Go
/// keyword nor one of the `reserved` locals of the emitting function.
///
/// # Examples
///
/// ```
/// use ctorgen_core::naming::param_name;
///
/// assert_eq!(param_name("Address", &[]), "address");
/// assert_eq!(param_name("Type", &[]), "type_");
/// assert_eq!(param_name("v", &["v"]), "v_");
/// ```
pub fn param_name(field: &str, reserved: &[&str]) -> String {
    let mut name = to_lower_initial(field);
    while is_keyword(&name) || reserved.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

/// Method receiver name for a type: its first character, lower-cased.
pub fn receiver_name(type_name: &str) -> String {
    type_name
        .chars()
        .next()
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_else(|| "r".to_string())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("Name", "name")]
    #[test_case("HTTPClient", "hTTPClient" ; "only first rune of acronym")]
    #[test_case("name", "name" ; "already lower")]
    #[test_case("Ünicode", "ünicode" ; "non ascii")]
    #[test_case("", "")]
    fn to_lower_initial___flips_first_rune(input: &str, expected: &str) {
        assert_eq!(to_lower_initial(input), expected);
    }

    #[test_case("name", "Name")]
    #[test_case("httpClient", "HttpClient")]
    #[test_case("instanceID", "InstanceID")]
    #[test_case("Name", "Name" ; "already upper")]
    #[test_case("_private", "_private" ; "underscore has no case")]
    #[test_case("", "")]
    fn to_upper_initial___flips_first_rune(input: &str, expected: &str) {
        assert_eq!(to_upper_initial(input), expected);
    }

    #[test]
    fn to_upper_initial___preserves_rest_of_string() {
        assert_eq!(to_upper_initial("tlsKey"), "TlsKey");
        assert_eq!(to_upper_initial("aLLCAPS"), "ALLCAPS");
    }

    #[test]
    fn is_exported___checks_first_character() {
        assert!(is_exported("PublicField"));
        assert!(!is_exported("privateField"));
        assert!(!is_exported("_underscore"));
        assert!(!is_exported(""));
    }

    #[test]
    fn accessor_name___prefixes_get() {
        assert_eq!(accessor_name("address"), "GetAddress");
        assert_eq!(accessor_name("instanceID"), "GetInstanceID");
    }

    #[test]
    fn mutator_name___applies_optional_prefix() {
        assert_eq!(mutator_name(Some("With"), "name"), "WithName");
        assert_eq!(mutator_name(Some("Set"), "maxConns"), "SetMaxConns");
        assert_eq!(mutator_name(None, "dsn"), "Dsn");
    }

    #[test]
    fn option_name___prefixes_with() {
        assert_eq!(option_name("tlsKey"), "WithTlsKey");
        assert_eq!(option_name("Port"), "WithPort");
    }

    #[test]
    fn param_name___lowers_exported_fields() {
        assert_eq!(param_name("PublicField", &[]), "publicField");
    }

    #[test]
    fn param_name___escapes_keywords() {
        assert_eq!(param_name("Type", &[]), "type_");
        assert_eq!(param_name("range", &[]), "range_");
        assert_eq!(param_name("Func", &[]), "func_");
    }

    #[test]
    fn param_name___escapes_reserved_locals() {
        assert_eq!(param_name("B", &["b"]), "b_");
        assert_eq!(param_name("v", &["v", "v_"]), "v__");
        assert_eq!(param_name("value", &["v"]), "value");
    }

    #[test]
    fn receiver_name___uses_first_character() {
        assert_eq!(receiver_name("TestStruct"), "t");
        assert_eq!(receiver_name("Server"), "s");
        assert_eq!(receiver_name("config"), "c");
    }

    #[test]
    fn receiver_name___falls_back_for_non_letters() {
        assert_eq!(receiver_name("_hidden"), "r");
        assert_eq!(receiver_name(""), "r");
    }
}
