use serde::{Deserialize, Serialize};

/// Anything that reports a horizontal extent, typically a measured label.
pub trait HasWidth {
    fn width(&self) -> f64;
}

impl HasWidth for f64 {
    fn width(&self) -> f64 {
        *self
    }
}

impl<T: HasWidth + ?Sized> HasWidth for &T {
    fn width(&self) -> f64 {
        (**self).width()
    }
}

/// Measured size of a rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelExtent {
    pub width: f64,
    pub height: f64,
}

impl LabelExtent {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl HasWidth for LabelExtent {
    fn width(&self) -> f64 {
        self.width
    }
}

/// Returns the widest item, or `0.0` for an empty sequence.
///
/// The running maximum starts at zero, so negative widths never win, and
/// `NaN` widths are skipped.
#[must_use]
pub fn max_width<I>(items: I) -> f64
where
    I: IntoIterator,
    I::Item: HasWidth,
{
    items
        .into_iter()
        .fold(0.0, |widest, item| item.width().max(widest))
}
