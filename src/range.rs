//! Inclusive range predicate shared by the account and period filters.

/// Returns true if `target` lies within `[start, end]`.
///
/// `None` on either side leaves that side unbounded, so `in_range(None, None, x)`
/// holds for every `x`. Zero or an epoch date are ordinary bounds, not "unset".
pub fn in_range<T: PartialOrd>(start: Option<&T>, end: Option<&T>, target: &T) -> bool {
    match (start, end) {
        (None, None) => true,
        (None, Some(e)) => target <= e,
        (Some(s), None) => target >= s,
        (Some(s), Some(e)) => target >= s && target <= e,
    }
}
