use protovalid_types::field_constraints::{RepeatedConstraints, repeated_constraints};

use crate::path::FieldPath;

/// Checks the element count of a repeated field.
pub(crate) fn evaluate_repeated(path: &mut FieldPath, len: usize, c: &RepeatedConstraints) {
    let level = c.level();
    let len = u64::try_from(len).unwrap_or(u64::MAX);

    match c.empty_type {
        Some(repeated_constraints::EmptyType::Empty(true)) if len > 0 => {
            path.add_finding("list is not empty", level, c.msg.as_str());
        }
        Some(repeated_constraints::EmptyType::NotEmpty(true)) if len == 0 => {
            path.add_finding("list is empty", level, c.msg.as_str());
        }
        _ => {}
    }

    if c.len_eq > 0 {
        if len != u64::from(c.len_eq) {
            path.add_finding(
                format!("length of list is not {}", c.len_eq),
                level,
                c.msg.as_str(),
            );
        }
        return;
    }
    if c.len_gte > 0 && len < u64::from(c.len_gte) {
        path.add_finding(
            format!("length of list is less than {}", c.len_gte),
            level,
            c.msg.as_str(),
        );
    }
    if c.len_lte > 0 && len > u64::from(c.len_lte) {
        path.add_finding(
            format!("length of list is greater than {}", c.len_lte),
            level,
            c.msg.as_str(),
        );
    }
}
