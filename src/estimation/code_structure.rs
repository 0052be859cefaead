//! Parses loop-structured pseudocode -- Python-like, delimited by indentation -- into a tree of significant lines.\
//! Blank lines & `#` comments are ignored; a tab advances [TAB_WIDTH] columns.

use crate::errors::{EngineError, EngineResult};


/// columns a tab counts for
pub const TAB_WIDTH: usize = 4;

/// A significant line of code, together with the block it opens -- if any
#[derive(Debug, Clone, PartialEq)]
pub struct CodeNode<'a> {
    /// 1-based, as editors show it
    pub line:     usize,
    pub indent:   usize,
    /// the line's content, trimmed & stripped of trailing comments
    pub text:     &'a str,
    pub children: Vec<CodeNode<'a>>,
}

impl<'a> CodeNode<'a> {

    /// every line nested below this one, in source order
    pub fn descendants(&self) -> Vec<&CodeNode<'a>> {
        let mut found = Vec::new();
        for child in &self.children {
            found.push(child);
            found.extend(child.descendants());
        }
        found
    }

    /// `for ...:` & `while ...:` headers
    pub fn is_loop(&self) -> bool {
        (self.text.starts_with("for ") || self.text.starts_with("while ") || self.text.starts_with("while("))
            && self.text.ends_with(':')
    }

    /// the function name, if this line is a `def name(...):` header
    pub fn function_name(&self) -> Option<&'a str> {
        self.text.strip_prefix("def ")
            .and_then(|signature| signature.split('(').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}


/// Builds the indentation tree of `code`.\
/// The first significant line sets the base column -- so uniformly indented snippets are accepted --
/// and a dedent to a column no enclosing block opened is reported as [EngineError::AmbiguousStructure].
pub fn parse_structure(code: &str) -> EngineResult<Vec<CodeNode<'_>>> {
    let lines: Vec<(usize, usize, &str)> = code.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = strip_comment(raw).trim();
            (!text.is_empty()).then(|| (index + 1, indentation(raw), text))
        })
        .collect();
    let Some(&(_, base_indent, _)) = lines.first() else {
        return Ok(Vec::new());
    };
    let mut position = 0;
    let nodes = parse_block(&lines, &mut position, base_indent)?;
    match lines.get(position) {
        Some(&(line, indent, _)) => Err(dedent_error(line, indent)),
        None => Ok(nodes),
    }
}

/// parses sibling lines at `indent`, stopping at the first line that dedents below it
fn parse_block<'a>(lines: &[(usize, usize, &'a str)], position: &mut usize, indent: usize) -> EngineResult<Vec<CodeNode<'a>>> {
    let mut nodes = Vec::new();
    while let Some(&(line, line_indent, text)) = lines.get(*position) {
        if line_indent < indent {
            break;
        }
        if line_indent > indent {
            // only reachable after a nested block closed on an intermediate column
            return Err(dedent_error(line, line_indent));
        }
        *position += 1;
        let children = match lines.get(*position) {
            Some(&(_, child_indent, _)) if child_indent > indent => parse_block(lines, position, child_indent)?,
            _ => Vec::new(),
        };
        nodes.push(CodeNode { line, indent, text, children });
    }
    Ok(nodes)
}

fn dedent_error(line: usize, indent: usize) -> EngineError {
    EngineError::AmbiguousStructure { line, reason: format!("dedent to column {indent}, which no enclosing block opened") }
}

fn strip_comment(raw: &str) -> &str {
    raw.find('#').map_or(raw, |comment_start| &raw[..comment_start])
}

fn indentation(raw: &str) -> usize {
    raw.chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert_eq!(parse_structure(""), Ok(vec![]));
        assert_eq!(parse_structure("\n   \n# nothing here\n\t\n"), Ok(vec![]));
        let nodes = parse_structure("x = 1  # the answer\n\n# done\n").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!((nodes[0].line, nodes[0].text), (1, "x = 1"));
    }

    #[test]
    fn nesting_follows_indentation() {
        let code = "\
for i in range(n):
    for j in range(n):
        total += i * j
    print(total)
done = True";
        let nodes = parse_structure(code).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].children.len(), 2);
        assert_eq!(nodes[0].children[0].children[0].text, "total += i * j");
        assert_eq!(nodes[0].children[1].line, 4);
        assert_eq!(nodes[0].descendants().len(), 3);
        assert!(nodes[0].is_loop() && nodes[0].children[0].is_loop());
        assert!(!nodes[1].is_loop());
    }

    #[test]
    fn tabs_count_as_four_columns() {
        let nodes = parse_structure("while i < n:\n\ti += 1\n    j += 1").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].children.len(), 2);
        assert_eq!(nodes[0].children[0].indent, 4);
    }

    #[test]
    fn uniformly_indented_snippets_are_accepted() {
        let nodes = parse_structure("    def f(n):\n        return n\n").unwrap();
        assert_eq!(nodes[0].function_name(), Some("f"));
        assert_eq!(nodes[0].children[0].text, "return n");
    }

    #[test]
    fn dedent_to_unopened_columns_is_ambiguous() {
        assert_eq!(parse_structure("for i in items:\n        x += 1\n    y += 1"),
                   Err(EngineError::AmbiguousStructure { line: 3, reason: "dedent to column 4, which no enclosing block opened".to_string() }));
        assert!(matches!(parse_structure("    x = 1\ny = 2"), Err(EngineError::AmbiguousStructure { line: 2, .. })));
    }
}
