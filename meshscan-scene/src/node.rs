//! Scene-graph nodes

use crate::Geometry;
use meshscan_core::Transform3D;
use serde::{Deserialize, Serialize};

/// A named node in the render scene graph
///
/// Nodes carry at most one geometry and any number of named children. The
/// visualizer replaces a node's geometry wholesale on every anchor update,
/// so the fields are plain public data rather than an encapsulated API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform3D,
    pub geometry: Option<Geometry>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform3D::identity(),
            geometry: None,
            children: Vec::new(),
        }
    }

    /// Create a node holding a geometry
    pub fn with_geometry(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            transform: Transform3D::identity(),
            geometry: Some(geometry),
            children: Vec::new(),
        }
    }

    /// Attach a child node
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Find a direct child by name (non-recursive)
    pub fn child(&self, name: &str) -> Option<&SceneNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Find a direct child by name for mutation (non-recursive)
    pub fn child_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.children.iter_mut().find(|child| child.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_lookup_by_name() {
        let mut node = SceneNode::new("root");
        node.add_child(SceneNode::new("normals"));

        assert!(node.child("normals").is_some());
        assert!(node.child("missing").is_none());
    }

    #[test]
    fn test_child_lookup_is_not_recursive() {
        let mut inner = SceneNode::new("inner");
        inner.add_child(SceneNode::new("leaf"));
        let mut root = SceneNode::new("root");
        root.add_child(inner);

        assert!(root.child("inner").is_some());
        assert!(root.child("leaf").is_none());
    }

    #[test]
    fn test_child_mut_allows_geometry_swap() {
        let mut node = SceneNode::new("root");
        node.add_child(SceneNode::new("normals"));

        node.child_mut("normals").unwrap().name = "renamed".to_string();
        assert!(node.child("renamed").is_some());
    }
}
