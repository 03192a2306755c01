mod block;
mod rect;

pub use block::{layout, LayoutResult};
pub use rect::Rect;
