//! Indentation.

/// One nesting level; gofmt indents with tabs.
pub const INDENT: char = '\t';

/// Write `level` indentation units into `out`.
pub fn write_indent(out: &mut String, level: usize) {
    out.extend(std::iter::repeat_n(INDENT, level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_levels() {
        let mut out = String::new();
        write_indent(&mut out, 2);
        assert_eq!(out, "\t\t");
    }

    #[test]
    fn test_level_zero() {
        let mut out = String::from("x");
        write_indent(&mut out, 0);
        assert_eq!(out, "x");
    }
}
