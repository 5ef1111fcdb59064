use crate::component::Properties;
use crate::parser::ContentLineParams;
use crate::types::Value;

/// Undo TEXT escaping (RFC 5545 3.3.11).
///
/// Substitutions run one after the other: `\,` then `\;` then `\n`/`\N`
/// then `\\`.
pub fn unescape(value: &str) -> String {
    value
        .replace("\\,", ",")
        .replace("\\;", ";")
        .replace("\\n", "\n")
        .replace("\\N", "\n")
        .replace("\\\\", "\\")
}

/// Unescaped text, wrapped together with the line's parameters unless those
/// are empty or just `CHARSET=utf-8`.
pub fn text_value(params: &ContentLineParams, value: &str) -> Value {
    let value = unescape(value);
    if params.is_trivial() {
        Value::Text(value)
    } else {
        Value::Wrapped {
            params: params.coerce(),
            value,
        }
    }
}

pub fn store_text(props: &mut Properties, key: &str, params: &ContentLineParams, value: &str) {
    props.store(key, text_value(params, value));
}
