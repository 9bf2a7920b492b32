use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const REF_SEGMENT_MAX_LEN: usize = 63;

/// Kind assumed for owner references that do not name one.
pub const OWNER_DEFAULT_KIND: &str = "group";

fn parse_segment(input: &str, segment: &str) -> Result<String, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError(format!("{segment} must not be empty")));
    }
    if s.len() > REF_SEGMENT_MAX_LEN {
        return Err(ValidationError(format!(
            "{segment} exceeds max length {REF_SEGMENT_MAX_LEN}"
        )));
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ValidationError(format!(
            "{segment} must match [A-Za-z0-9._-]+"
        )));
    }
    Ok(s.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct RefKind(String);

impl RefKind {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        parse_segment(input, "kind").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RefKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct RefNamespace(String);

impl RefNamespace {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        parse_segment(input, "namespace").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RefNamespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct RefName(String);

impl RefName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        parse_segment(input, "name").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RefName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fallback kind and namespace applied when a compound reference string
/// leaves them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefDefaults {
    pub kind: String,
    pub namespace: String,
}

impl RefDefaults {
    /// Defaults for resolving owner references: kind [`OWNER_DEFAULT_KIND`],
    /// namespace as supplied by the owning entity.
    #[must_use]
    pub fn owner(namespace: &str) -> Self {
        Self {
            kind: OWNER_DEFAULT_KIND.to_string(),
            namespace: namespace.to_string(),
        }
    }
}

/// Fully-qualified locator for a node in the catalog graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct EntityRef {
    pub kind: RefKind,
    pub namespace: RefNamespace,
    pub name: RefName,
}

impl EntityRef {
    pub fn new(kind: &str, namespace: &str, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            kind: RefKind::parse(kind)?,
            namespace: RefNamespace::parse(namespace)?,
            name: RefName::parse(name)?,
        })
    }

    /// Parse a compound reference of the form `[kind:][namespace/]name`.
    ///
    /// The kind segment is case-insensitive and normalized to lower case;
    /// segments left out fall back to `defaults`. Explicitly empty segments
    /// (`":x"`, `"k:/x"`) are rejected.
    pub fn from_compound(input: &str, defaults: &RefDefaults) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError(
                "entity reference must not be empty".to_string(),
            ));
        }
        let (kind_part, rest) = match trimmed.split_once(':') {
            Some((kind, rest)) => (Some(kind), rest),
            None => (None, trimmed),
        };
        let (namespace_part, name_part) = match rest.split_once('/') {
            Some((namespace, name)) => (Some(namespace), name),
            None => (None, rest),
        };
        let kind = match kind_part {
            Some(kind) => RefKind::parse(&kind.to_ascii_lowercase())?,
            None => RefKind::parse(&defaults.kind)?,
        };
        let namespace = match namespace_part {
            Some(namespace) => RefNamespace::parse(namespace)?,
            None => RefNamespace::parse(&defaults.namespace)?,
        };
        Ok(Self {
            kind,
            namespace,
            name: RefName::parse(name_part)?,
        })
    }

    /// The entity's own fully-qualified reference. The kind is taken
    /// verbatim; only references parsed from compound strings get their kind
    /// lowercased.
    pub fn for_entity(entity: &crate::Entity) -> Result<Self, ValidationError> {
        Ok(Self {
            kind: RefKind::parse(&entity.kind)?,
            namespace: RefNamespace::parse(entity.namespace_or_default())?,
            name: RefName::parse(&entity.metadata.name)?,
        })
    }

    #[must_use]
    pub fn canonical_string(&self) -> String {
        format!(
            "{}:{}/{}",
            self.kind.as_str(),
            self.namespace.as_str(),
            self.name.as_str()
        )
    }
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}
