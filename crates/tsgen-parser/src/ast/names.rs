use super::{ConstructionError, Expression, NumericLiteral, StringLiteral};
use smallvec::SmallVec;
use std::fmt;
use tsgen_scanner::char_codes::is_identifier_text;

/// An identifier name. Keywords are accepted so the same node can serve as a
/// property name after `.`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    text: String,
}

impl Identifier {
    pub fn new(text: impl Into<String>) -> Result<Self, ConstructionError> {
        let text = text.into();
        if !is_identifier_text(&text) {
            return Err(ConstructionError::InvalidIdentifier(text));
        }
        Ok(Identifier { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A possibly dotted name such as `A.B.C`, used by type references, `typeof`
/// queries and namespace declarations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityName {
    segments: SmallVec<[Identifier; 2]>,
}

impl EntityName {
    pub fn new(segments: Vec<Identifier>) -> Result<Self, ConstructionError> {
        if segments.is_empty() {
            return Err(ConstructionError::TooFewElements {
                what: "an entity name",
                min: 1,
            });
        }
        Ok(EntityName {
            segments: SmallVec::from_vec(segments),
        })
    }

    /// `left.right`
    pub fn qualify(mut self, right: Identifier) -> Self {
        self.segments.push(right);
        self
    }

    pub fn segments(&self) -> &[Identifier] {
        &self.segments
    }

    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }
}

impl From<Identifier> for EntityName {
    fn from(identifier: Identifier) -> Self {
        let mut segments = SmallVec::new();
        segments.push(identifier);
        EntityName { segments }
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// The name of a property in an object literal, object type, class or enum.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyName {
    Identifier(Identifier),
    String(StringLiteral),
    Numeric(NumericLiteral),
    Computed(Box<Expression>),
}

impl From<Identifier> for PropertyName {
    fn from(identifier: Identifier) -> Self {
        PropertyName::Identifier(identifier)
    }
}
