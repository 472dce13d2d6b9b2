//! Narrative token micro-format.
//!
//! Report documents use "narrative" placeholders so that label-like fields can
//! reference a computed trait instead of carrying literal text. A narrative
//! value is an ordinary string field that holds either literal text or an
//! encoded token.
//!
//! ## Token form
//! - Prefix: `$narrative(`
//! - Suffix: `)`
//! - Content: 2–3 comma-separated parts: `title,traitName[,traitValue]`
//! - Example: `$narrative(Overall score,endurance,82)`
//!
//! Notes:
//! - Decoding a non-token string yields the all-empty [`NarrativeParts`];
//!   callers treat that as "this is literal text".
//! - Encoding an all-empty title/trait pair yields the empty string, so the
//!   all-empty round trip is intentionally lossy.
//! - Parts are split on `,` with no escaping. A title or trait name that
//!   contains a literal comma will not decode back to itself; this is an
//!   accepted limitation of the format, not a parser bug.
//!
//! This crate also provides [`NarrativeText`], the field type used by the
//! document model for every narrative-capable field. Whether a field may hold
//! a token is a property of the schema, carried by the type — a plain
//! `String` field never is.

/// Literal prefix of an encoded narrative token.
pub const NARRATIVE_PREFIX: &str = "$narrative(";

/// Literal suffix of an encoded narrative token.
pub const NARRATIVE_SUFFIX: &str = ")";

/// The decoded content of a narrative token.
///
/// `trait_value` is `None` when the token had fewer than three parts or the
/// third part was empty after trimming.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NarrativeParts {
    pub title: String,
    pub trait_name: String,
    pub trait_value: Option<String>,
}

/// Returns `true` iff `value` is an encoded narrative token.
pub fn is_token(value: &str) -> bool {
    value.starts_with(NARRATIVE_PREFIX) && value.ends_with(NARRATIVE_SUFFIX)
}

/// Decode a narrative token into its parts.
///
/// Non-token input decodes to the all-empty [`NarrativeParts`]. Each part is
/// trimmed; missing parts decode to the empty string, and a missing or empty
/// third part decodes to `trait_value: None`.
pub fn decode(value: &str) -> NarrativeParts {
    if !is_token(value) {
        return NarrativeParts::default();
    }

    let content = &value[NARRATIVE_PREFIX.len()..value.len() - NARRATIVE_SUFFIX.len()];
    let mut parts = content.split(',').map(str::trim);

    let title = parts.next().unwrap_or("").to_string();
    let trait_name = parts.next().unwrap_or("").to_string();
    let trait_value = parts
        .next()
        .filter(|part| !part.is_empty())
        .map(str::to_string);

    NarrativeParts {
        title,
        trait_name,
        trait_value,
    }
}

/// Encode parts into a narrative token.
///
/// Returns the empty string when both `title` and `trait_name` are empty.
/// An empty `trait_value` is omitted from the token, which is why
/// `decode(encode(..))` collapses it to `None`.
pub fn encode(title: &str, trait_name: &str, trait_value: Option<&str>) -> String {
    if title.is_empty() && trait_name.is_empty() {
        return String::new();
    }

    let mut content = format!("{title},{trait_name}");
    if let Some(value) = trait_value.filter(|value| !value.is_empty()) {
        content.push(',');
        content.push_str(value);
    }

    format!("{NARRATIVE_PREFIX}{content}{NARRATIVE_SUFFIX}")
}

/// A narrative-capable text field.
///
/// Holds the *raw* value — literal text or an encoded token — exactly as it
/// appears on the wire. The document model types every narrative-capable
/// field as `NarrativeText`, so "may this field hold a token" is part of the
/// static schema rather than a flag stamped onto a value at runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NarrativeText(String);

impl NarrativeText {
    /// Wrap a raw value. No validation: literal text is always acceptable.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a field value from decoded parts (the inverse of [`parts`]).
    ///
    /// [`parts`]: NarrativeText::parts
    pub fn from_parts(parts: &NarrativeParts) -> Self {
        Self(encode(
            &parts.title,
            &parts.trait_name,
            parts.trait_value.as_deref(),
        ))
    }

    /// The raw value, token or literal.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` iff the current value is an encoded token.
    pub fn is_token(&self) -> bool {
        is_token(&self.0)
    }

    /// Decode the current value; literal text yields the all-empty parts.
    pub fn parts(&self) -> NarrativeParts {
        decode(&self.0)
    }
}

impl std::fmt::Display for NarrativeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NarrativeText {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for NarrativeText {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for NarrativeText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NarrativeText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NarrativeText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_tokens() {
        assert!(is_token("$narrative(a,b)"));
        assert!(is_token("$narrative(,)"));
        assert!(!is_token("plain text"));
        assert!(!is_token("$narrative(unterminated"));
        assert!(!is_token(""));
    }

    #[test]
    fn decodes_two_part_token() {
        let parts = decode("$narrative(Intro,score)");
        assert_eq!(parts.title, "Intro");
        assert_eq!(parts.trait_name, "score");
        assert_eq!(parts.trait_value, None);
    }

    #[test]
    fn decodes_three_part_token_with_trimming() {
        let parts = decode("$narrative( Intro , score , 82 )");
        assert_eq!(parts.title, "Intro");
        assert_eq!(parts.trait_name, "score");
        assert_eq!(parts.trait_value.as_deref(), Some("82"));
    }

    #[test]
    fn non_token_decodes_to_empty_parts() {
        assert_eq!(decode("just a label"), NarrativeParts::default());
        assert_eq!(decode(""), NarrativeParts::default());
    }

    #[test]
    fn empty_pair_encodes_to_empty_string() {
        assert_eq!(encode("", "", None), "");
        assert_eq!(encode("", "", Some("ignored")), "");
    }

    #[test]
    fn empty_trait_value_is_omitted() {
        assert_eq!(encode("Intro", "score", Some("")), "$narrative(Intro,score)");
    }

    #[test]
    fn round_trips_non_empty_parts() {
        let cases = [
            ("Intro", "score", None),
            ("Intro", "", None),
            ("", "score", None),
            ("Overall score", "endurance", Some("82")),
        ];

        for (title, trait_name, trait_value) in cases {
            let parts = decode(&encode(title, trait_name, trait_value));
            assert_eq!(parts.title, title);
            assert_eq!(parts.trait_name, trait_name);
            assert_eq!(parts.trait_value.as_deref(), trait_value);
        }
    }

    #[test]
    fn embedded_comma_does_not_survive_round_trip() {
        // Documented format limitation: commas are part separators.
        let parts = decode(&encode("a,b", "c", None));
        assert_eq!(parts.title, "a");
        assert_eq!(parts.trait_name, "b");
        assert_eq!(parts.trait_value.as_deref(), Some("c"));
    }

    #[test]
    fn narrative_text_round_trips_parts() {
        let field = NarrativeText::from_parts(&NarrativeParts {
            title: "Intro".into(),
            trait_name: "score".into(),
            trait_value: Some("9".into()),
        });
        assert!(field.is_token());
        assert_eq!(field.parts().trait_value.as_deref(), Some("9"));
    }

    #[test]
    fn default_is_empty_literal() {
        let field = NarrativeText::default();
        assert_eq!(field.as_str(), "");
        assert!(!field.is_token());
        assert_eq!(field.parts(), NarrativeParts::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_is_transparent() {
        let field = NarrativeText::new("$narrative(Intro,score)");
        let json = serde_json::to_string(&field).expect("serialize");
        assert_eq!(json, "\"$narrative(Intro,score)\"");

        let back: NarrativeText = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, field);
    }
}
