use std::fmt;
use serde_json::Value;

/// What went wrong at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A required field is absent.
    Missing,
    /// The value is of the wrong primitive kind, e.g. a number where a string is expected.
    WrongKind,
    /// The value is of the right kind but is not allowed, e.g. a literal or pattern mismatch.
    InvalidValue,
    /// The tag of a discriminated union matched none of its declared variants.
    NoMatchingVariant,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::WrongKind => write!(f, "wrong kind"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::NoMatchingVariant => write!(f, "no matching variant"),
        }
    }
}

/// A single field that did not conform.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Path to the field, e.g. `listings[3].item.ovr`. The root is `(root)`.
    pub path: String,
    /// What went wrong.
    pub kind: IssueKind,
    /// Description of what was expected.
    pub expected: String,
    /// The value that was found. `None` if the field was absent.
    pub actual: Option<Value>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: expected {}, received ", self.kind, self.path, self.expected)?;

        match &self.actual {
            None => write!(f, "nothing"),
            Some(Value::Array(items)) => write!(f, "array of {} element(s)", items.len()),
            Some(Value::Object(_)) => write!(f, "object"),
            Some(value) => write!(f, "{value}"),
        }
    }
}

/// Every issue found while validating a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// The issues in the order they were found.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// The number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The paths of every issue.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.path.as_str())
    }

    /// Gets the first issue at `path`.
    pub fn find(&self, path: &str) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.path == path)
    }
}

impl From<Vec<ValidationIssue>> for ValidationReport {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self {
            issues,
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "  - {issue}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Path of the value currently being validated.
#[derive(Debug, Default)]
pub(crate) struct Path {
    segments: Vec<Segment>,
}

#[derive(Debug)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

impl Path {
    pub fn push_key(&mut self, key: &'static str) {
        self.segments.push(Segment::Key(key));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn render(&self) -> String {
        if self.segments.is_empty() {
            return String::from("(root)");
        }

        let mut rendered = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    if !rendered.is_empty() {
                        rendered.push('.');
                    }

                    rendered.push_str(key);
                },
                Segment::Index(index) => {
                    rendered.push_str(&format!("[{index}]"));
                },
            }
        }

        rendered
    }
}
