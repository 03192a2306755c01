mod markup;
mod node;
mod tags;

pub use markup::Markup;
pub use node::{ElementData, Node, NodeId, NodeKind};
pub use tags::StyleTags;
