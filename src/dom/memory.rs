//! In-memory document tree

use std::collections::{BTreeMap, BTreeSet};

use super::{Document, NodeId, Selector};
use crate::utils::helpers::{escape_html, strip_tags, unescape_html};

/// Element description used to build a [`MemoryDocument`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    /// Inner markup
    pub content: String,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content = escape_html(text);
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.content = html.to_string();
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
}

/// Flat arena of elements; insertion order is document order
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
}

impl MemoryDocument {
    /// Create a document holding only a `body` root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new("body"),
                parent: None,
            }],
        }
    }

    /// Append `element` as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        debug_assert!(parent.0 < self.nodes.len());
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: Some(parent),
        });
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0).map(|n| &n.element)
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.nodes.get(node.0).and_then(|n| n.parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes.get(parent.0).and_then(|n| n.parent);
        }
        false
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0).map(|n| &mut n.element)
    }

    fn ids(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), &n.element))
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(element: &Element, selector: &Selector<'_>) -> bool {
    if !element.tag.eq_ignore_ascii_case(selector.tag) {
        return false;
    }
    match selector.attribute {
        Some((name, value)) => element.attributes.get(name).map(String::as_str) == Some(value),
        None => true,
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn query_attribute(&self, attribute: &str) -> Vec<NodeId> {
        self.ids()
            .filter(|(_, e)| e.attributes.contains_key(attribute))
            .map(|(id, _)| id)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids()
            .find(|(_, e)| e.id.as_deref() == Some(id))
            .map(|(node, _)| node)
    }

    fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.ids()
            .find(|(_, e)| e.classes.contains(class))
            .map(|(node, _)| node)
    }

    fn find_within(&self, root: NodeId, selector: &Selector<'_>) -> Option<NodeId> {
        self.ids()
            .find(|(node, e)| matches(e, selector) && self.is_descendant(*node, root))
            .map(|(node, _)| node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(e) = self.element_mut(node) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn text(&self, node: NodeId) -> Option<String> {
        self.element(node).map(|e| unescape_html(&strip_tags(&e.content)))
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(e) = self.element_mut(node) {
            e.content = escape_html(text);
        }
    }

    fn inner_html(&self, node: NodeId) -> Option<String> {
        self.element(node).map(|e| e.content.clone())
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        if let Some(e) = self.element_mut(node) {
            e.content = html.to_string();
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).map_or(false, |e| e.classes.contains(class))
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, present: bool) {
        if let Some(e) = self.element_mut(node) {
            if present {
                e.classes.insert(class.to_string());
            } else {
                e.classes.remove(class);
            }
        }
    }
}
