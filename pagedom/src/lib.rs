pub mod document;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listeners;
pub mod node;
pub mod text;

pub use document::Document;
pub use event::{InputEvent, Key, Modifiers, MouseButton, RawInput, UnknownKey};
pub use hit::{hit_test, hit_test_within};
pub use layout::{layout, LayoutResult, Rect};
pub use listeners::{ListenerId, ListenerKind, ListenerRegistry};
pub use node::{ElementData, Markup, Node, NodeId, NodeKind, StyleTags};
