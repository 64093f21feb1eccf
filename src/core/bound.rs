/// Clamps `value` into `[floor, ceiling]`.
///
/// `floor <= ceiling` is a precondition and is not checked. The floor is
/// tested first, so with an inverted range every value at or above `floor`
/// clamps to `ceiling`. Values unordered against `floor` (`NaN`) clamp to
/// `floor`.
#[must_use]
pub fn bound<T: PartialOrd>(floor: T, value: T, ceiling: T) -> T {
    if value >= floor {
        if value <= ceiling { value } else { ceiling }
    } else {
        floor
    }
}
