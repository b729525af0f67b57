//! Emitter formatting options.

use serde::{Deserialize, Serialize};
use tsgen_common::NewLineKind;

/// Formatting options for [`emit`](crate::emit).
///
/// Options are an immutable value. Build one with [`EmitOptions::default`]
/// and the `with_*` helpers, or load it from JSON with
/// [`EmitOptions::from_json`]; every field missing from the JSON keeps its
/// default.
///
/// ```
/// use tsgen_common::NewLineKind;
/// use tsgen_emitter::EmitOptions;
///
/// let options = EmitOptions::default()
///     .with_indentation("  ")
///     .with_new_line(NewLineKind::CarriageReturnLineFeed);
/// assert_eq!(options.indentation(), "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmitOptions {
    new_line: NewLineKind,
    indentation: String,
    single_line_js_doc_comments: bool,
    space_after_anonymous_function_keyword: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            new_line: NewLineKind::LineFeed,
            indentation: "    ".to_string(),
            single_line_js_doc_comments: false,
            space_after_anonymous_function_keyword: true,
        }
    }
}

impl EmitOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn new_line(&self) -> NewLineKind {
        self.new_line
    }

    /// The text of one indentation level.
    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    /// Whether a JSDoc comment with a single line is written as `/** text */`.
    pub fn single_line_js_doc_comments(&self) -> bool {
        self.single_line_js_doc_comments
    }

    /// `function (a)` rather than `function(a)` for unnamed functions.
    pub fn space_after_anonymous_function_keyword(&self) -> bool {
        self.space_after_anonymous_function_keyword
    }

    #[must_use]
    pub fn with_new_line(mut self, new_line: NewLineKind) -> Self {
        self.new_line = new_line;
        self
    }

    #[must_use]
    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    #[must_use]
    pub fn with_single_line_js_doc_comments(mut self, enabled: bool) -> Self {
        self.single_line_js_doc_comments = enabled;
        self
    }

    #[must_use]
    pub fn with_space_after_anonymous_function_keyword(mut self, enabled: bool) -> Self {
        self.space_after_anonymous_function_keyword = enabled;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
