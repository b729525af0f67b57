//! Comments, JSDoc and layout trivia attached to nodes for re-emission.
//!
//! Trivia is never produced by the parser (the lexer drops comments); it is
//! attached by calling code that builds trees to be emitted.

use super::ConstructionError;
use tsgen_scanner::char_codes::is_line_break;

/// Trivia emitted before and after a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trivia {
    pub leading: Vec<TriviaNode>,
    pub trailing: Vec<TriviaNode>,
}

impl Trivia {
    pub fn leading(nodes: Vec<TriviaNode>) -> Self {
        Trivia {
            leading: nodes,
            trailing: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriviaNode {
    SingleLineComment(SingleLineComment),
    MultiLineComment(MultiLineComment),
    JsDoc(JsDocComment),
    /// Horizontal whitespace written verbatim.
    Whitespace(String),
    /// An empty line.
    Newline,
}

impl TriviaNode {
    pub fn whitespace(text: impl Into<String>) -> Result<Self, ConstructionError> {
        let text = text.into();
        if !text.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConstructionError::InvalidText {
                what: "whitespace trivia",
                text,
            });
        }
        Ok(TriviaNode::Whitespace(text))
    }
}

fn reject_comment_terminator(what: &'static str, text: &str) -> Result<(), ConstructionError> {
    if text.contains("*/") {
        return Err(ConstructionError::InvalidText {
            what,
            text: text.to_string(),
        });
    }
    Ok(())
}

/// `// text`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleLineComment {
    text: String,
}

impl SingleLineComment {
    pub fn new(text: impl Into<String>) -> Result<Self, ConstructionError> {
        let text = text.into();
        if text.chars().any(is_line_break) {
            return Err(ConstructionError::InvalidText {
                what: "single-line comment",
                text,
            });
        }
        Ok(SingleLineComment { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// `/* text */`. Unless spacing is preserved, multi-line text is re-wrapped
/// with a ` * ` prefix on every line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiLineComment {
    text: String,
    preserve_spacing: bool,
}

impl MultiLineComment {
    pub fn new(text: impl Into<String>) -> Result<Self, ConstructionError> {
        let text = text.into();
        reject_comment_terminator("multi-line comment", &text)?;
        Ok(MultiLineComment {
            text,
            preserve_spacing: false,
        })
    }

    /// A comment written back exactly as given between `/*` and `*/`.
    pub fn preserving_spacing(text: impl Into<String>) -> Result<Self, ConstructionError> {
        let mut comment = Self::new(text)?;
        comment.preserve_spacing = true;
        Ok(comment)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn preserve_spacing(&self) -> bool {
        self.preserve_spacing
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

// =============================================================================
// JSDoc
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsDocParam {
    pub name: String,
    pub description: String,
}

/// A structured `/** ... */` comment.
///
/// Tags are stored by kind, so output order is fixed no matter in which order
/// the builder methods were called.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsDocComment {
    description: Option<String>,
    summary: Option<String>,
    file_overview: Option<String>,
    copyright: Option<String>,
    package_private: bool,
    params: Vec<JsDocParam>,
    returns: Option<String>,
    throws: Vec<String>,
    examples: Vec<String>,
    see: Vec<String>,
}

impl JsDocComment {
    pub fn builder() -> JsDocCommentBuilder {
        JsDocCommentBuilder::default()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn params(&self) -> &[JsDocParam] {
        &self.params
    }

    /// The comment body, one entry per output line, in canonical order:
    /// description, `@summary`, `@fileoverview`, `@copyright`, `@package`,
    /// `@param`s in insertion order, `@returns`, `@throws`, `@example`s and
    /// `@see`s.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(description) = &self.description {
            lines.extend(description.lines().map(str::to_string));
        }
        if let Some(summary) = &self.summary {
            push_tag(&mut lines, "summary", summary);
        }
        if let Some(file_overview) = &self.file_overview {
            push_tag(&mut lines, "fileoverview", file_overview);
        }
        if let Some(copyright) = &self.copyright {
            push_tag(&mut lines, "copyright", copyright);
        }
        if self.package_private {
            push_tag(&mut lines, "package", "");
        }
        for param in &self.params {
            if param.description.is_empty() {
                push_tag(&mut lines, "param", &param.name);
            } else {
                push_tag(&mut lines, "param", &format!("{} {}", param.name, param.description));
            }
        }
        if let Some(returns) = &self.returns {
            push_tag(&mut lines, "returns", returns);
        }
        for throws in &self.throws {
            push_tag(&mut lines, "throws", throws);
        }
        for example in &self.examples {
            // Example code always starts on its own line.
            push_tag(&mut lines, "example", "");
            lines.extend(example.lines().map(str::to_string));
        }
        for see in &self.see {
            push_tag(&mut lines, "see", see);
        }
        lines
    }
}

/// `@name first-line`, followed by any further lines of `text` verbatim.
fn push_tag(lines: &mut Vec<String>, name: &str, text: &str) {
    let mut text_lines = text.lines();
    match text_lines.next() {
        Some(first) if !first.is_empty() => lines.push(format!("@{name} {first}")),
        _ => lines.push(format!("@{name}")),
    }
    lines.extend(text_lines.map(str::to_string));
}

/// Builder for [`JsDocComment`].
#[derive(Clone, Debug, Default)]
pub struct JsDocCommentBuilder {
    doc: JsDocComment,
}

impl JsDocCommentBuilder {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.doc.description = Some(text.into());
        self
    }

    pub fn summary(mut self, text: impl Into<String>) -> Self {
        self.doc.summary = Some(text.into());
        self
    }

    pub fn file_overview(mut self, text: impl Into<String>) -> Self {
        self.doc.file_overview = Some(text.into());
        self
    }

    pub fn copyright(mut self, text: impl Into<String>) -> Self {
        self.doc.copyright = Some(text.into());
        self
    }

    pub fn package_private(mut self) -> Self {
        self.doc.package_private = true;
        self
    }

    pub fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.doc.params.push(JsDocParam {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    pub fn returns(mut self, text: impl Into<String>) -> Self {
        self.doc.returns = Some(text.into());
        self
    }

    pub fn throws(mut self, text: impl Into<String>) -> Self {
        self.doc.throws.push(text.into());
        self
    }

    pub fn example(mut self, code: impl Into<String>) -> Self {
        self.doc.examples.push(code.into());
        self
    }

    pub fn see(mut self, reference: impl Into<String>) -> Self {
        self.doc.see.push(reference.into());
        self
    }

    /// Fails if any text would terminate the comment early.
    pub fn build(self) -> Result<JsDocComment, ConstructionError> {
        let doc = self.doc;
        let texts = doc
            .description
            .iter()
            .chain(&doc.summary)
            .chain(&doc.file_overview)
            .chain(&doc.copyright)
            .chain(&doc.returns)
            .chain(&doc.throws)
            .chain(&doc.examples)
            .chain(&doc.see)
            .chain(doc.params.iter().flat_map(|p| [&p.name, &p.description]));
        for text in texts {
            reject_comment_terminator("JSDoc text", text)?;
        }
        Ok(doc)
    }
}

#[cfg(test)]
#[path = "../../tests/trivia_tests.rs"]
mod tests;
