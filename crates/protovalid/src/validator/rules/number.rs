use std::fmt::Write as _;

use protovalid_types::field_constraints::{
    DoubleConstraints, Int32Constraints, double_constraints, int32_constraints,
};

use crate::path::FieldPath;

/// Checks a double against its bounds, each widened by `eps`.
///
/// Lower and upper bound are checked independently. The exclusive upper bound
/// reports values `<= lt + eps`, the same direction as the exclusive lower
/// bound; this mirrors the established behavior and is kept as is.
pub(crate) fn evaluate_double(path: &mut FieldPath, v: f64, c: &DoubleConstraints) {
    let level = c.level();
    let eps = c.eps;

    match c.min {
        Some(double_constraints::Min::Gte(gte)) if v < gte - eps => {
            path.add_finding(format!("value {v:.6} is less than {gte:.6}"), level, c.msg.as_str());
        }
        Some(double_constraints::Min::Gt(gt)) if v <= gt - eps => {
            path.add_finding(
                format!("value {v:.6} is less than or equal {gt:.6}"),
                level,
                c.msg.as_str(),
            );
        }
        _ => {}
    }

    match c.max {
        Some(double_constraints::Max::Lte(lte)) if v > lte + eps => {
            path.add_finding(
                format!("value {v:.6} is greater than {lte:.6}"),
                level,
                c.msg.as_str(),
            );
        }
        Some(double_constraints::Max::Lt(lt)) if v <= lt + eps => {
            path.add_finding(
                format!("value {v:.6} is greater than or equal {lt:.6}"),
                level,
                c.msg.as_str(),
            );
        }
        _ => {}
    }
}

/// Checks an int32 against its bounds, then against exactly one of `in`,
/// `not_in` or `eq`, whichever is declared first in that order.
pub(crate) fn evaluate_int32(path: &mut FieldPath, v: i32, c: &Int32Constraints) {
    let level = c.level();

    match c.min {
        Some(int32_constraints::Min::Gte(gte)) if v < gte => {
            path.add_finding(format!("value {v} is less than {gte}"), level, c.msg.as_str());
        }
        Some(int32_constraints::Min::Gt(gt)) if v <= gt => {
            path.add_finding(
                format!("value {v} is less than or equal {gt}"),
                level,
                c.msg.as_str(),
            );
        }
        _ => {}
    }

    match c.max {
        Some(int32_constraints::Max::Lte(lte)) if v > lte => {
            path.add_finding(format!("value {v} is greater than {lte}"), level, c.msg.as_str());
        }
        Some(int32_constraints::Max::Lt(lt)) if v <= lt => {
            path.add_finding(
                format!("value {v} is greater than or equal {lt}"),
                level,
                c.msg.as_str(),
            );
        }
        _ => {}
    }

    if !c.r#in.is_empty() {
        if !c.r#in.contains(&v) {
            path.add_finding(
                format!("value {v} is not in {}", format_set(&c.r#in)),
                level,
                c.msg.as_str(),
            );
        }
    } else if !c.not_in.is_empty() {
        if c.not_in.contains(&v) {
            path.add_finding(
                format!("value {v} is in {}", format_set(&c.not_in)),
                level,
                c.msg.as_str(),
            );
        }
    } else if c.eq != 0 && v != c.eq {
        path.add_finding(format!("value {v} is not {}", c.eq), level, c.msg.as_str());
    }
}

/// Formats a set as `[1 2 3]`.
fn format_set(values: &[i32]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
    out.push(']');
    out
}
