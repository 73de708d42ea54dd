//! Host document the rendered tree is attached to
//!
//! A document is a flat set of host elements addressed by id. A [`Root`]
//! borrows one of them and attaches a tree exactly once.

use crate::dom::Node;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("mount point `#{id}` not found in host document")]
    MissingMountPoint { id: String },
}

/// A host element that can receive a rendered tree
#[derive(Debug)]
pub struct HostElement {
    id: String,
    content: Option<Node>,
}

impl HostElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The attached tree, `None` until a root renders into it
    pub fn content(&self) -> Option<&Node> {
        self.content.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<HostElement>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding a single empty element with the given id
    pub fn with_mount_point(id: &str) -> Self {
        let mut document = Self::new();
        document.add_element(id);
        document
    }

    /// Add an empty host element; ids already present are left untouched
    pub fn add_element(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.element(&id).is_none() {
            self.elements.push(HostElement { id, content: None });
        }
    }

    pub fn element(&self, id: &str) -> Option<&HostElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut HostElement> {
        self.elements.iter_mut().find(|element| element.id == id)
    }
}

/// Render target bound to one host element
pub struct Root<'a> {
    container: &'a mut HostElement,
}

/// Bind a root to the element with the given id
pub fn create_root<'a>(document: &'a mut Document, id: &str) -> Result<Root<'a>, MountError> {
    let container = document
        .element_mut(id)
        .ok_or_else(|| MountError::MissingMountPoint { id: id.to_string() })?;
    Ok(Root { container })
}

impl Root<'_> {
    /// Attach the tree. Consumes the root, so it renders once.
    pub fn render(self, tree: Node) {
        debug!(id = %self.container.id(), tree = %tree, "Tree attached");
        self.container.content = Some(tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, Tag};

    #[test]
    fn create_root_fails_without_element() {
        let mut document = Document::new();
        let err = create_root(&mut document, "root").err().unwrap();
        assert_eq!(err, MountError::MissingMountPoint { id: "root".into() });
        assert_eq!(err.to_string(), "mount point `#root` not found in host document");
    }

    #[test]
    fn render_attaches_tree_to_element() {
        let mut document = Document::with_mount_point("root");
        assert!(document.element("root").unwrap().content().is_none());

        let root = create_root(&mut document, "root").unwrap();
        root.render(Element::new(Tag::H1).text("Hi").into());

        let content = document.element("root").unwrap().content().unwrap();
        assert_eq!(content.to_string(), "<h1>Hi</h1>");
    }

    #[test]
    fn render_only_touches_its_own_element() {
        let mut document = Document::with_mount_point("root");
        document.add_element("modal");

        create_root(&mut document, "modal")
            .unwrap()
            .render(Node::Text("x".into()));

        assert!(document.element("root").unwrap().content().is_none());
        assert_eq!(document.element("modal").unwrap().id(), "modal");
        assert!(document.element("modal").unwrap().content().is_some());
    }

    #[test]
    fn add_element_ignores_duplicate_ids() {
        let mut document = Document::with_mount_point("root");
        create_root(&mut document, "root")
            .unwrap()
            .render(Node::Text("kept".into()));
        document.add_element("root");

        let content = document.element("root").unwrap().content().unwrap();
        assert_eq!(content.text_content(), "kept");
    }
}
