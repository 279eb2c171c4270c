//! Static bidirectional mapping between declarative primitive type names
//! and typed-field type names.

use phf::phf_map;

/// Declarative primitive name -> typed-field type.
static DECLARED_TO_FIELD: phf::Map<&'static str, &'static str> = phf_map! {
    "String" => "string",
    "Boolean" => "boolean",
    "Date" => "Date",
    "Number" => "number",
    "Array" => "any[]",
    "Object" => "any",
};

/// Typed-field type -> declarative primitive name.
static FIELD_TO_DECLARED: phf::Map<&'static str, &'static str> = phf_map! {
    "string" => "String",
    "boolean" => "Boolean",
    "Date" => "Date",
    "number" => "Number",
    "any[]" => "Array",
    "any" => "Object",
};

/// The typed-field type to emit for a declarative type name.
///
/// Unknown names fall back to the untyped equivalent.
pub fn field_type_for(declared: &str) -> &'static str {
    DECLARED_TO_FIELD.get(declared).copied().unwrap_or("any")
}

/// The declarative type name to emit for a typed-field type.
///
/// Array-shaped types map to `Array` regardless of the table; other
/// unknown types are object-shaped and map to `Object`.
pub fn declared_type_for(field_type: &str) -> &'static str {
    if is_array_type(field_type) {
        return "Array";
    }
    FIELD_TO_DECLARED.get(field_type).copied().unwrap_or("Object")
}

/// True for a bracket suffix or generic array wrapper.
pub fn is_array_type(field_type: &str) -> bool {
    let t = field_type.trim();
    t.ends_with("[]") || t.starts_with("Array<") || t.starts_with("ReadonlyArray<")
}

/// The five built-in typed-field primitives that a field declaration
/// expresses on its own, with no explicit annotation needed.
pub fn is_builtin_field_type(field_type: &str) -> bool {
    matches!(field_type.trim(), "string" | "number" | "boolean" | "Date" | "any")
}
