mod color;
mod edges;
mod enums;
mod style;

pub use color::{ParseColorError, Rgb};
pub use edges::Edges;
pub use enums::{Border, TextAlign, TextStyle};
pub use style::Style;
