use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrInt {
    Bool(bool),
    Int(i64),
    String(String),
}

/// Accepts `true`/`false`, `1`/`0`, their string forms, the empty string and
/// `null` (both false).
pub fn deserialize_bool_flexible<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolOrInt>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolOrInt::Bool(b)) => Ok(b),
        Some(BoolOrInt::Int(i)) => Ok(i != 0),
        Some(BoolOrInt::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "Invalid boolean string: {}",
                other
            ))),
        },
    }
}

/// Writes a flag the way form selects submit it: `"true"` or `"false"`.
pub fn serialize_bool_as_string<S>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "true" } else { "false" })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

/// Identifiers come back as strings from most providers and as bare numbers
/// from some; both end up as their string form.
pub fn deserialize_string_flexible<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Int(i)) => i.to_string(),
        Some(StringOrNumber::Float(f)) => f.to_string(),
    })
}

/// Display text that providers may send as `null`; missing and `null` both read as `""`.
pub fn deserialize_string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
