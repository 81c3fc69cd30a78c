//! Numeric coercion for free-form form fields.

/// Coerce a free-form text field to an integer, falling back to zero.
///
/// Editor drafts keep numeric fields as text until submit; an empty or
/// unparsable value becomes `0` rather than a validation error, matching the
/// dashboard's `Number(x) || 0` submit semantics.
pub fn int_or_zero(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}
