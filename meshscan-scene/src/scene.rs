//! Root scene container handed to the renderer

use crate::SceneNode;
use std::collections::HashMap;

/// The set of root nodes currently attached to the render scene
///
/// Nodes are keyed by their unique name, which the visualizer derives
/// deterministically from the anchor identifier.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: HashMap<String, SceneNode>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of root nodes in the scene
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the scene holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach a node, replacing any existing node of the same name
    pub fn insert(&mut self, node: SceneNode) -> Option<SceneNode> {
        self.nodes.insert(node.name.clone(), node)
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.get(name)
    }

    /// Look up a node by name for mutation
    pub fn node_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.nodes.get_mut(name)
    }

    /// Detach and return a node by name
    pub fn remove(&mut self, name: &str) -> Option<SceneNode> {
        self.nodes.remove(name)
    }

    /// Iterate over all root nodes in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values()
    }
}
