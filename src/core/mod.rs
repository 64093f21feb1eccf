pub mod bound;
pub mod intervals;
pub mod width;

pub use bound::bound;
pub use intervals::{intervals, round_half_up};
pub use width::{HasWidth, LabelExtent, max_width};
