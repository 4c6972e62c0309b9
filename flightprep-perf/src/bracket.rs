//! Breakpoint selection along a single table axis.

#[cfg(test)]
mod tests;

/// The breakpoints selected around a target value on one axis.
///
/// Indices refer to the slice passed to [`bracket_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// The target is within tolerance of the breakpoint at this index.
    Exact(usize),
    /// The target lies strictly between the breakpoints at these two adjacent indices.
    Between(usize, usize),
    /// The target lies outside the range of breakpoints,
    /// and the breakpoint at this index is the nearest one.
    Clamped(usize),
}

impl Bracket {
    /// Whether the target is outside the tabulated range.
    #[must_use]
    pub fn is_clamped(self) -> bool { matches!(self, Self::Clamped(_)) }
}

/// Brackets `target` among `items`, which must be sorted by `key` in ascending order.
///
/// A breakpoint within `tolerance` of `target` is always preferred over interpolation,
/// so that targets exactly on the table reproduce the tabulated value.
///
/// Returns `None` if `items` is empty.
pub fn bracket_by<T>(
    items: &[T],
    key: impl Fn(&T) -> f32,
    target: f32,
    tolerance: f32,
) -> Option<Bracket> {
    let tolerance = tolerance.max(0.0);
    let offset = |index: usize| (key(&items[index]) - target).abs();

    let upper = items.partition_point(|item| key(item) < target);
    let below = upper.checked_sub(1);
    let above = Some(upper).filter(|&index| index < items.len());

    match (below, above) {
        (None, None) => None,
        (Some(low), Some(high)) => {
            let nearest = if offset(low) <= offset(high) { low } else { high };
            if offset(nearest) <= tolerance {
                Some(Bracket::Exact(nearest))
            } else {
                Some(Bracket::Between(low, high))
            }
        }
        (Some(index), None) | (None, Some(index)) => {
            if offset(index) <= tolerance {
                Some(Bracket::Exact(index))
            } else {
                Some(Bracket::Clamped(index))
            }
        }
    }
}
