//! Document seam
//!
//! The controller never owns page elements. It reaches them through the
//! [`Document`] trait, which a host implements over its real tree. An
//! in-memory implementation is provided for tests and tooling.

pub mod memory;

pub use memory::{Element, MemoryDocument};

/// Opaque handle to an element in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Element match used to find form controls: a tag name and an optional attribute equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'a> {
    pub tag: &'a str,
    pub attribute: Option<(&'a str, &'a str)>,
}

impl<'a> Selector<'a> {
    pub fn with_attribute(tag: &'a str, name: &'a str, value: &'a str) -> Self {
        Self { tag, attribute: Some((name, value)) }
    }
}

/// Queryable, mutable element tree
pub trait Document {
    /// Root element (the page body)
    fn root(&self) -> NodeId;

    /// All elements carrying `attribute`, in document order
    fn query_attribute(&self, attribute: &str) -> Vec<NodeId>;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// First element in document order carrying `class`
    fn first_by_class(&self, class: &str) -> Option<NodeId>;

    /// First descendant of `root` matching `selector`
    fn find_within(&self, root: NodeId, selector: &Selector<'_>) -> Option<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Text content with markup removed
    fn text(&self, node: NodeId) -> Option<String>;

    fn set_text(&mut self, node: NodeId, text: &str);

    fn inner_html(&self, node: NodeId) -> Option<String>;

    fn set_inner_html(&mut self, node: NodeId, html: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Add `class` when `present`, remove it otherwise
    fn toggle_class(&mut self, node: NodeId, class: &str, present: bool);
}
