//! Textual rendering of error trees.
//!
//! Leaves render as their summary. Aggregates render each child as a
//! bulleted entry (`- `), continuation lines indented by two spaces.
//! Labels become section headers, either inline (`label: first line`) or
//! as a block (`label:` followed by the indented body). A labeled aggregate
//! with exactly one child renders that child without a bullet.

use super::error::{ErrorContext, ValidationError};

const BULLET: &str = "- ";
const INDENT: &str = "  ";

/// Renders an error tree to its display form.
pub(crate) fn render(error: &ValidationError) -> String {
    lines(error).join("\n")
}

fn lines(error: &ValidationError) -> Vec<String> {
    match error {
        ValidationError::Failed { summary } => vec![summary.to_string()],
        ValidationError::Foreign(foreign) => vec![foreign.to_string()],
        ValidationError::ManyFailed { errors, context } => aggregate(errors, context),
    }
}

fn aggregate(errors: &[ValidationError], context: &ErrorContext) -> Vec<String> {
    let Some(label) = context.label.as_deref() else {
        return bulleted(errors);
    };

    let body = match errors {
        [only] => lines(only),
        _ => bulleted(errors),
    };

    let mut out = Vec::with_capacity(body.len() + 1);
    let mut rest = body.into_iter();
    if context.inline {
        match rest.next() {
            Some(first) => out.push(format!("{label}: {first}")),
            None => out.push(format!("{label}:")),
        }
    } else {
        out.push(format!("{label}:"));
    }
    out.extend(rest.map(|line| format!("{INDENT}{line}")));
    out
}

fn bulleted(errors: &[ValidationError]) -> Vec<String> {
    let mut out = Vec::new();
    for error in errors {
        let mut child = lines(error).into_iter();
        if let Some(first) = child.next() {
            out.push(format!("{BULLET}{first}"));
        }
        out.extend(child.map(|line| format!("{INDENT}{line}")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(summary: &'static str) -> ValidationError {
        ValidationError::failed(summary)
    }

    #[test]
    fn test_leaf_renders_summary() {
        assert_eq!(render(&failed("too short")), "too short");
    }

    #[test]
    fn test_aggregate_renders_bullets() {
        let error = ValidationError::many([failed("a"), failed("b")]);
        assert_eq!(render(&error), "- a\n- b");
    }

    #[test]
    fn test_nested_aggregate_indents_continuation_lines() {
        let error = ValidationError::many([
            failed("a"),
            ValidationError::many([failed("b"), failed("c")]),
        ]);
        assert_eq!(render(&error), "- a\n- - b\n  - c");
    }

    #[test]
    fn test_inline_label_single_child() {
        let error = ValidationError::labeled("email", true, failed("missing @"));
        assert_eq!(render(&error), "email: missing @");
    }

    #[test]
    fn test_block_label_single_child() {
        let error = ValidationError::labeled("email", false, failed("missing @"));
        assert_eq!(render(&error), "email:\n  missing @");
    }

    #[test]
    fn test_block_label_many_children() {
        let error = ValidationError::labeled(
            "user",
            false,
            ValidationError::many([failed("a"), failed("b")]),
        );
        assert_eq!(render(&error), "user:\n  - a\n  - b");
    }

    #[test]
    fn test_inline_label_many_children() {
        let error = ValidationError::labeled(
            "user",
            true,
            ValidationError::many([failed("a"), failed("b")]),
        );
        assert_eq!(render(&error), "user: - a\n  - b");
    }

    #[test]
    fn test_empty_aggregate() {
        assert_eq!(render(&ValidationError::many([])), "");
    }
}
