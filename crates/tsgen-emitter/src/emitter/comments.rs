use super::Printer;
use tsgen_parser::ast::{JsDocComment, MultiLineComment, TriviaNode};

impl Printer<'_> {
    // =========================================================================
    // Trivia
    // =========================================================================

    pub(super) fn emit_trivia_node(&mut self, node: &TriviaNode) {
        match node {
            TriviaNode::SingleLineComment(comment) => {
                let text = comment.text();
                self.write("//");
                if !text.is_empty() && !text.starts_with(' ') {
                    self.write_space();
                }
                self.write(text);
            }
            TriviaNode::MultiLineComment(comment) => self.emit_multi_line_comment(comment),
            TriviaNode::JsDoc(doc) => self.emit_js_doc(doc),
            TriviaNode::Whitespace(text) => self.write(text),
            TriviaNode::Newline => self.write_line(),
        }
    }

    /// Comments written before a node, each on its own line.
    pub(super) fn emit_leading_trivia(&mut self, nodes: &[TriviaNode]) {
        for node in nodes {
            self.emit_trivia_node(node);
            if is_comment(node) {
                self.ensure_line_start();
            }
        }
    }

    /// Comments written after a node on the same line. A trailing newline
    /// leaves a blank line after the node.
    pub(super) fn emit_trailing_trivia(&mut self, nodes: &[TriviaNode]) {
        for node in nodes {
            match node {
                TriviaNode::Newline => {
                    self.ensure_line_start();
                    self.write_line();
                }
                TriviaNode::SingleLineComment(_) => {
                    self.write_space();
                    self.emit_trivia_node(node);
                    self.ensure_line_start();
                }
                TriviaNode::MultiLineComment(_) | TriviaNode::JsDoc(_) => {
                    self.write_space();
                    self.emit_trivia_node(node);
                }
                TriviaNode::Whitespace(_) => self.emit_trivia_node(node),
            }
        }
    }

    fn emit_multi_line_comment(&mut self, comment: &MultiLineComment) {
        if comment.preserve_spacing() {
            self.emit_verbatim_comment(comment.text());
            return;
        }
        let lines: Vec<&str> = comment.lines().collect();
        match lines.as_slice() {
            [] => self.write("/* */"),
            [line] => {
                self.write("/* ");
                self.write(line.trim());
                self.write(" */");
            }
            _ => {
                self.write("/*");
                self.write_line();
                for line in lines {
                    self.emit_comment_line(line.trim());
                }
                self.write(" */");
            }
        }
    }

    /// `/*text*/` with the text's own line breaks and spacing. Continuation
    /// lines are not indented.
    fn emit_verbatim_comment(&mut self, text: &str) {
        self.write("/*");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.write_line();
            }
            self.write_verbatim(line.strip_suffix('\r').unwrap_or(line));
        }
        self.write_verbatim("*/");
    }

    fn emit_js_doc(&mut self, doc: &JsDocComment) {
        let lines = doc.lines();
        match lines.as_slice() {
            [] => self.write("/** */"),
            [line] if self.options.single_line_js_doc_comments() => {
                self.write("/** ");
                self.write(line);
                self.write(" */");
            }
            _ => {
                self.write("/**");
                self.write_line();
                for line in &lines {
                    self.emit_comment_line(line);
                }
                self.write(" */");
            }
        }
    }

    /// ` * text`, or a bare ` *` for an empty line.
    fn emit_comment_line(&mut self, line: &str) {
        if line.is_empty() {
            self.write(" *");
        } else {
            self.write(" * ");
            self.write(line);
        }
        self.write_line();
    }
}

fn is_comment(node: &TriviaNode) -> bool {
    matches!(
        node,
        TriviaNode::SingleLineComment(_) | TriviaNode::MultiLineComment(_) | TriviaNode::JsDoc(_)
    )
}
