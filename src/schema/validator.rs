use super::report::{IssueKind, Path, ValidationIssue};
use super::{describe_options, Schema, StringRule};
use serde_json::Value;

pub fn validate(
    schema: &Schema,
    value: &Value,
    path: &mut Path,
    issues: &mut Vec<ValidationIssue>,
) {
    match schema {
        Schema::String(rule) => match value {
            Value::String(s) => if !string_conforms(rule, s) {
                issues.push(issue(path, IssueKind::InvalidValue, schema.describe(), value));
            },
            _ => issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value)),
        },
        Schema::Number => if !value.is_number() {
            issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value));
        },
        Schema::Integer { min } => match value {
            Value::Number(number) => {
                let conforms = match number.as_i64() {
                    Some(n) => min.map_or(true, |min| n >= min),
                    // u64 beyond i64::MAX is still an integer above any bound
                    None => number.is_u64(),
                };

                if !conforms {
                    issues.push(issue(path, IssueKind::InvalidValue, schema.describe(), value));
                }
            },
            _ => issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value)),
        },
        Schema::Boolean => if !value.is_boolean() {
            issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value));
        },
        Schema::Null => if !value.is_null() {
            issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value));
        },
        Schema::Literal(expected) => if value != expected {
            let kind = if same_kind(value, expected) {
                IssueKind::InvalidValue
            } else {
                IssueKind::WrongKind
            };

            issues.push(issue(path, kind, schema.describe(), value));
        },
        Schema::OneOf(options) => match value {
            Value::String(s) => if !options.contains(&s.as_str()) {
                issues.push(issue(path, IssueKind::InvalidValue, schema.describe(), value));
            },
            _ => issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value)),
        },
        Schema::Nullable(inner) => if !value.is_null() {
            validate(inner, value, path, issues);
        },
        Schema::Optional(inner) => validate(inner, value, path, issues),
        Schema::Array(item) => match value {
            Value::Array(elements) => for (index, element) in elements.iter().enumerate() {
                path.push_index(index);
                validate(item, element, path, issues);
                path.pop();
            },
            _ => issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value)),
        },
        Schema::Object(fields) => match value {
            Value::Object(map) => for (key, field) in fields {
                path.push_key(*key);

                match map.get(*key) {
                    Some(field_value) => validate(field, field_value, path, issues),
                    None => if !matches!(field, Schema::Optional(_)) {
                        issues.push(ValidationIssue {
                            path: path.render(),
                            kind: IssueKind::Missing,
                            expected: field.describe(),
                            actual: None,
                        });
                    },
                }

                path.pop();
            },
            _ => issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value)),
        },
        Schema::Union { tag, variants } => {
            let Value::Object(map) = value else {
                issues.push(issue(path, IssueKind::WrongKind, schema.describe(), value));
                return;
            };
            let tag_value = map.get(*tag);
            let selected = tag_value.and_then(|tag_value| {
                variants
                    .iter()
                    .find(|(literal, _)| literal == tag_value)
                    .map(|(_, variant)| variant)
            });

            match selected {
                Some(variant) => validate(variant, value, path, issues),
                None => {
                    path.push_key(*tag);
                    issues.push(ValidationIssue {
                        path: path.render(),
                        kind: IssueKind::NoMatchingVariant,
                        expected: describe_options(variants.iter().map(|(literal, _)| literal.to_string())),
                        actual: tag_value.cloned(),
                    });
                    path.pop();
                },
            }
        },
    }
}

fn issue(
    path: &Path,
    kind: IssueKind,
    expected: String,
    actual: &Value,
) -> ValidationIssue {
    ValidationIssue {
        path: path.render(),
        kind,
        expected,
        actual: Some(actual.clone()),
    }
}

fn string_conforms(rule: &StringRule, s: &str) -> bool {
    match rule {
        StringRule::Any => true,
        StringRule::NonEmpty => !s.is_empty(),
        StringRule::Pattern { regex, .. } => regex.is_match(s),
        StringRule::Url => url::Url::parse(s).is_ok(),
        StringRule::DateTime => chrono::DateTime::parse_from_rfc3339(s).is_ok(),
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
