//! Declarative response shapes.
//!
//! Every response from the API is checked against a [`Schema`] before it is converted into a
//! typed value. A schema describes the literal wire format: numeric values the API sends as
//! strings are declared as strings and are never coerced. Validation walks the whole value and
//! reports every field that does not conform rather than stopping at the first.
//!
//! Types implement [`Shape`] to declare their schema and are parsed with [`parse`].

mod report;
mod validator;

pub use report::{IssueKind, ValidationIssue, ValidationReport};

use lazy_regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Rules for string values.
#[derive(Debug, Clone)]
pub enum StringRule {
    /// Any string.
    Any,
    /// A string with at least one character.
    NonEmpty,
    /// A string matching a pattern.
    Pattern {
        /// The pattern.
        regex: &'static Regex,
        /// Describes the pattern in diagnostics, e.g. "numeric string".
        description: &'static str,
    },
    /// An absolute URL.
    Url,
    /// An RFC 3339 date-time.
    DateTime,
}

/// The shape of a JSON value.
#[derive(Debug, Clone)]
pub enum Schema {
    /// A string.
    String(StringRule),
    /// Any number.
    Number,
    /// An integral number, optionally with a lower bound.
    Integer {
        /// The minimum allowed value.
        min: Option<i64>,
    },
    /// A boolean.
    Boolean,
    /// `null`.
    Null,
    /// Exactly this value.
    Literal(Value),
    /// One of these strings.
    OneOf(&'static [&'static str]),
    /// The inner shape or `null`.
    Nullable(Box<Schema>),
    /// The inner shape. As an object field it may also be absent.
    Optional(Box<Schema>),
    /// An array where every element has the inner shape.
    Array(Box<Schema>),
    /// An object with these fields. Fields not listed are ignored.
    Object(Vec<(&'static str, Schema)>),
    /// An object whose `tag` field selects which variant shape applies.
    Union {
        /// The discriminating field.
        tag: &'static str,
        /// The tag value for each variant and its shape.
        variants: Vec<(Value, Schema)>,
    },
}

impl Schema {
    /// Any string.
    pub fn string() -> Self {
        Self::String(StringRule::Any)
    }

    /// A string with at least one character.
    pub fn non_empty_string() -> Self {
        Self::String(StringRule::NonEmpty)
    }

    /// A string matching `regex`.
    pub fn pattern(regex: &'static Regex, description: &'static str) -> Self {
        Self::String(StringRule::Pattern {
            regex,
            description,
        })
    }

    /// A string containing only digits. Used for counts and prices the API sends as strings.
    pub fn numeric_string() -> Self {
        Self::pattern(lazy_regex::regex!(r"^\d+$"), "numeric string")
    }

    /// An absolute URL.
    pub fn url() -> Self {
        Self::String(StringRule::Url)
    }

    /// An RFC 3339 date-time.
    pub fn date_time() -> Self {
        Self::String(StringRule::DateTime)
    }

    /// Any number.
    pub fn number() -> Self {
        Self::Number
    }

    /// Any integer.
    pub fn integer() -> Self {
        Self::Integer {
            min: None,
        }
    }

    /// An integer of at least `min`.
    pub fn integer_at_least(min: i64) -> Self {
        Self::Integer {
            min: Some(min),
        }
    }

    /// An integer of at least zero.
    pub fn non_negative_integer() -> Self {
        Self::integer_at_least(0)
    }

    /// A boolean.
    pub fn boolean() -> Self {
        Self::Boolean
    }

    /// Exactly `value`.
    pub fn literal<T>(value: T) -> Self
    where
        T: Into<Value>,
    {
        Self::Literal(value.into())
    }

    /// One of `values`.
    pub fn one_of(values: &'static [&'static str]) -> Self {
        Self::OneOf(values)
    }

    /// An array of `item`.
    pub fn array(item: Schema) -> Self {
        Self::Array(Box::new(item))
    }

    /// An object with `fields`.
    pub fn object<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Schema)>,
    {
        Self::Object(fields.into_iter().collect())
    }

    /// A discriminated union selected by the `tag` field.
    pub fn union<I>(tag: &'static str, variants: I) -> Self
    where
        I: IntoIterator<Item = (Value, Schema)>,
    {
        Self::Union {
            tag,
            variants: variants.into_iter().collect(),
        }
    }

    /// This shape or `null`.
    pub fn nullable(self) -> Self {
        Self::Nullable(Box::new(self))
    }

    /// This shape, or absent when used as an object field.
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Adds `fields` to an object shape.
    ///
    /// # Panics
    ///
    /// Panics if this shape is not an object. Shapes are declared statically, so this only
    /// happens when a declaration is wrong.
    pub fn with_fields<I>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Schema)>,
    {
        match self {
            Self::Object(mut existing) => {
                existing.extend(fields);
                Self::Object(existing)
            },
            other => panic!("Fields can only be added to an object shape, not {}", other.describe()),
        }
    }

    /// Describes what this shape expects, for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::String(StringRule::Any) => "string".into(),
            Self::String(StringRule::NonEmpty) => "non-empty string".into(),
            Self::String(StringRule::Pattern { description, .. }) => (*description).into(),
            Self::String(StringRule::Url) => "URL".into(),
            Self::String(StringRule::DateTime) => "ISO date-time".into(),
            Self::Number => "number".into(),
            Self::Integer { min: None } => "integer".into(),
            Self::Integer { min: Some(min) } => format!("integer >= {min}"),
            Self::Boolean => "boolean".into(),
            Self::Null => "null".into(),
            Self::Literal(value) => value.to_string(),
            Self::OneOf(values) => describe_options(values.iter().map(|value| format!("\"{value}\""))),
            Self::Nullable(inner) => format!("{} or null", inner.describe()),
            Self::Optional(inner) => inner.describe(),
            Self::Array(_) => "array".into(),
            Self::Object(_) |
            Self::Union { .. } => "object".into(),
        }
    }

    /// Checks `value` against this shape. Every non-conforming path is collected into the
    /// report.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationReport> {
        let mut issues = Vec::new();

        validator::validate(self, value, &mut report::Path::default(), &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport::from(issues))
        }
    }
}

pub(crate) fn describe_options<I>(options: I) -> String
where
    I: Iterator<Item = String>,
{
    format!("one of {}", options.collect::<Vec<_>>().join(", "))
}

/// A type with a declared wire shape.
pub trait Shape: DeserializeOwned {
    /// The schema values of this type must conform to.
    fn schema() -> Schema;
}

/// Validates `value` against the schema of `T` and converts it.
///
/// The typed value is only built after the whole value has passed validation.
pub fn parse<T>(value: &Value) -> Result<T, ValidationReport>
where
    T: Shape,
{
    T::schema().validate(value)?;

    <T as serde::Deserialize>::deserialize(value).map_err(|error| {
        ValidationReport::from(vec![ValidationIssue {
            path: String::from("(root)"),
            kind: IssueKind::InvalidValue,
            expected: error.to_string(),
            actual: None,
        }])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Counter {
        id: String,
        progress_current: String,
        total: Option<i64>,
    }

    impl Shape for Counter {
        fn schema() -> Schema {
            Schema::object([
                ("id", Schema::string()),
                ("progress_current", Schema::numeric_string()),
                ("total", Schema::integer().nullable()),
            ])
        }
    }

    fn pet_schema() -> Schema {
        Schema::union("type", [
            (json!("dog"), Schema::object([
                ("type", Schema::literal("dog")),
                ("barks", Schema::boolean()),
            ])),
            (json!("cat"), Schema::object([
                ("type", Schema::literal("cat")),
                ("lives", Schema::integer_at_least(0)),
            ])),
        ])
    }

    #[test]
    fn parses_conforming_value() {
        let value = json!({ "id": "7", "progress_current": "12", "total": null });
        let counter = parse::<Counter>(&value).unwrap();

        assert_eq!(counter, Counter {
            id: "7".into(),
            progress_current: "12".into(),
            total: None,
        });
    }

    #[test]
    fn names_missing_field() {
        let value = json!({ "progress_current": "12", "total": 3 });
        let report = parse::<Counter>(&value).unwrap_err();
        let issue = report.find("id").unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(issue.kind, IssueKind::Missing);
        assert_eq!(issue.expected, "string");
        assert_eq!(issue.actual, None);
    }

    #[test]
    fn collects_every_failing_path() {
        let schema = Schema::array(Counter::schema());
        let value = json!([
            { "id": 1, "progress_current": "1", "total": 1 },
            { "id": "2", "progress_current": "two", "total": "3" },
        ]);
        let report = schema.validate(&value).unwrap_err();
        let paths = report.paths().collect::<Vec<_>>();

        assert_eq!(paths, vec!["[0].id", "[1].progress_current", "[1].total"]);
    }

    #[test]
    fn does_not_coerce_numeric_strings() {
        let value = json!({ "id": "7", "progress_current": 12, "total": null });
        let report = parse::<Counter>(&value).unwrap_err();
        let issue = report.find("progress_current").unwrap();

        assert_eq!(issue.kind, IssueKind::WrongKind);
        assert_eq!(issue.actual, Some(json!(12)));
    }

    #[test]
    fn unknown_tag_is_variant_mismatch() {
        let report = pet_schema().validate(&json!({ "type": "horse", "barks": 5 })).unwrap_err();
        let issue = report.find("type").unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(issue.kind, IssueKind::NoMatchingVariant);
        assert_eq!(issue.actual, Some(json!("horse")));
        assert!(report.issues().iter().all(|issue| issue.kind != IssueKind::WrongKind));
    }

    #[test]
    fn missing_tag_is_variant_mismatch() {
        let report = pet_schema().validate(&json!({ "barks": true })).unwrap_err();

        assert_eq!(report.find("type").map(|issue| issue.kind), Some(IssueKind::NoMatchingVariant));
    }

    #[test]
    fn known_tag_validates_selected_variant() {
        assert!(pet_schema().validate(&json!({ "type": "cat", "lives": 9 })).is_ok());

        let report = pet_schema().validate(&json!({ "type": "cat", "lives": -1 })).unwrap_err();
        let issue = report.find("lives").unwrap();

        assert_eq!(issue.kind, IssueKind::InvalidValue);
        assert_eq!(issue.expected, "integer >= 0");
    }

    #[test]
    fn optional_fields_may_be_absent_but_not_null() {
        let schema = Schema::object([("is_sellable", Schema::boolean().optional())]);

        assert!(schema.validate(&json!({})).is_ok());
        assert!(schema.validate(&json!({ "is_sellable": true })).is_ok());
        assert!(schema.validate(&json!({ "is_sellable": null })).is_err());
    }

    #[test]
    fn checks_string_rules() {
        let schema = Schema::object([
            ("img", Schema::url()),
            ("name", Schema::non_empty_string()),
            ("ends", Schema::date_time().nullable()),
            ("rarity", Schema::one_of(&["Gold", "Silver"])),
        ]);

        assert!(schema.validate(&json!({
            "img": "https://cdn.example.com/a.png",
            "name": "Card",
            "ends": "2025-06-01T12:00:00Z",
            "rarity": "Gold",
        })).is_ok());

        let report = schema.validate(&json!({
            "img": "not a url",
            "name": "",
            "ends": "yesterday",
            "rarity": "gold",
        })).unwrap_err();

        assert_eq!(report.len(), 4);
        assert!(report.issues().iter().all(|issue| issue.kind == IssueKind::InvalidValue));
    }

    #[test]
    fn rejects_fractional_integers() {
        let report = Schema::integer().validate(&json!(1.5)).unwrap_err();

        assert_eq!(report.find("(root)").map(|issue| issue.kind), Some(IssueKind::InvalidValue));
        assert!(Schema::number().validate(&json!(1.5)).is_ok());
    }

    #[test]
    fn adds_fields_to_object() {
        let schema = Schema::object([("id", Schema::string())])
            .with_fields([("total", Schema::integer())]);
        let report = schema.validate(&json!({ "id": "7" })).unwrap_err();

        assert_eq!(report.find("total").map(|issue| issue.kind), Some(IssueKind::Missing));
    }

    #[test]
    #[should_panic(expected = "Fields can only be added to an object shape")]
    fn adding_fields_to_union_panics() {
        let _ = pet_schema().with_fields([("success", Schema::literal(true))]);
    }

    #[test]
    fn validation_does_not_mutate_input() {
        let value = json!({ "id": 1, "progress_current": "x" });
        let before = value.clone();
        let _ = Counter::schema().validate(&value);

        assert_eq!(value, before);
    }
}
