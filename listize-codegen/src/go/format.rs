//! Formatting pass over generated Go text.
//!
//! The pass checks that the text parses, adds imports for package qualifiers
//! the declarations use, and re-emits the file with gofmt indentation and
//! spacing.

use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use indexmap::IndexSet;
use listize_extract::{Node, SourceUnit};

use super::{GoFile, ImportResolver, ImportSet, RawCode};
use crate::FormatError;
use crate::builder::write_indent;

/// Validate, complete and normalize a generated Go file.
///
/// Qualifiers such as `time` in `time.Time` are resolved against the imports
/// of the file at `path_hint` first and the standard library second.
/// Qualifiers neither knows about are left for the Go toolchain to report.
pub fn format_source(src: &str, path_hint: Option<&Path>) -> Result<String, FormatError> {
    let unit = SourceUnit::parse(src).map_err(|e| FormatError::from_parse(e, src))?;
    let package = unit.package_name().ok_or(FormatError::MissingPackage)?;

    let root = unit.root();
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_clause")
        .ok_or(FormatError::MissingPackage)?;

    let mut imports = ImportSet::new();
    for import in unit.imports() {
        imports.insert(import);
    }
    let resolver = ImportResolver::for_source(path_hint);
    for qualifier in qualifiers(&unit) {
        if imports.has_local(&qualifier) {
            continue;
        }
        if let Some(import) = resolver.resolve(&qualifier) {
            imports.insert(import);
        }
    }

    let mut file = GoFile::new(package).imports(&imports);
    let header = src[..clause.start_byte()].trim();
    if !header.is_empty() {
        file = file.header_raw(header);
    }
    for item in declarations(&unit, clause.end_byte()) {
        file = file.add(RawCode::new(item));
    }

    Ok(normalize(&file.render()))
}

/// Package qualifiers of qualified types, first use first.
fn qualifiers(unit: &SourceUnit) -> Vec<String> {
    let mut found = IndexSet::new();
    collect_qualifiers(unit, unit.root(), &mut found);
    found.into_iter().collect()
}

fn collect_qualifiers(unit: &SourceUnit, node: Node<'_>, found: &mut IndexSet<String>) {
    if node.kind() == "qualified_type" {
        if let Some(package) = node.child_by_field_name("package") {
            found.insert(unit.node_text(package).to_string());
        }
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_qualifiers(unit, child, found);
    }
}

/// Top-level items after the package clause, imports excluded.
///
/// Comments stay attached to the declaration that follows on the next line,
/// and to the one they trail on the same line.
fn declarations(unit: &SourceUnit, after: usize) -> Vec<String> {
    let root = unit.root();
    let mut cursor = root.walk();
    let mut items: Vec<String> = Vec::new();
    // End row of the previous item, and whether it was a comment on its own line.
    let mut prev: Option<(usize, bool)> = None;

    for node in root.named_children(&mut cursor) {
        if node.start_byte() < after || node.kind() == "import_declaration" {
            continue;
        }
        let text = unit.node_text(node);
        let row = node.start_position().row;
        let is_comment = node.kind() == "comment";
        let attach = match prev {
            Some((end, _)) if is_comment && end == row => Some(" "),
            Some((end, true)) if end + 1 == row => Some("\n"),
            _ => None,
        };
        let standalone_comment = is_comment && attach != Some(" ");
        match (attach, items.last_mut()) {
            (Some(sep), Some(last)) => {
                last.push_str(sep);
                last.push_str(text);
            }
            _ => items.push(text.to_string()),
        }
        prev = Some((node.end_position().row, standalone_comment));
    }
    items
}

/// Re-indent by bracket depth, trim line ends and collapse blank runs.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut scanner = BracketScanner::default();
    let mut depth = 0usize;
    let mut blank = true;

    for line in text.lines() {
        let verbatim = scanner.in_literal();
        let delta = scanner.scan(line);

        if verbatim {
            out.push_str(line);
            out.push('\n');
            blank = false;
        } else {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if !blank {
                    out.push('\n');
                    blank = true;
                }
                continue;
            }
            let mut level = depth.saturating_sub(delta.leading_closers);
            if is_case_label(trimmed) {
                level = level.saturating_sub(1);
            }
            write_indent(&mut out, level);
            out.push_str(trimmed);
            out.push('\n');
            blank = false;
        }
        depth = depth.saturating_add_signed(delta.net);
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn is_case_label(line: &str) -> bool {
    line.starts_with("case ") || line == "default:"
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LineDelta {
    /// Closing brackets before any other token.
    leading_closers: usize,
    /// Opened minus closed brackets.
    net: isize,
}

/// Tracks brackets outside of literals and comments, line by line.
#[derive(Debug, Default)]
struct BracketScanner {
    in_raw_string: bool,
    in_block_comment: bool,
}

impl BracketScanner {
    fn in_literal(&self) -> bool {
        self.in_raw_string || self.in_block_comment
    }

    fn scan(&mut self, line: &str) -> LineDelta {
        let mut delta = LineDelta::default();
        let mut leading = !self.in_literal();
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if self.in_raw_string {
                if c == '`' {
                    self.in_raw_string = false;
                }
                continue;
            }
            if self.in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }
            match c {
                '`' => {
                    self.in_raw_string = true;
                    leading = false;
                }
                '"' | '\'' => {
                    skip_quoted(&mut chars, c);
                    leading = false;
                }
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '{' | '(' | '[' => {
                    delta.net += 1;
                    leading = false;
                }
                '}' | ')' | ']' => {
                    delta.net -= 1;
                    if leading {
                        delta.leading_closers += 1;
                    }
                }
                c if c.is_whitespace() => {}
                _ => leading = false,
            }
        }
        delta
    }
}

fn skip_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            break;
        }
    }
}
