//! Scene-graph capability used to publish transforms to a renderer.
//!
//! The simulation never owns render objects. Entities keep a [`NodeId`]
//! back-reference and write through whatever [`SceneGraph`] the host passes
//! in for the frame.

use std::collections::HashMap;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::NodeKind;

/// Opaque handle to a host scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Write-only view of the host scene graph.
pub trait SceneGraph {
    /// Create a node of the given kind and attach it to the scene root.
    fn create_node(&mut self, kind: NodeKind) -> NodeId;
    /// Detach and drop a node. Unknown ids are ignored.
    fn remove_node(&mut self, node: NodeId);
    fn set_position(&mut self, node: NodeId, position: Vec3);
    fn set_orientation(&mut self, node: NodeId, orientation: Quat);
    /// Uniform scale.
    fn set_scale(&mut self, node: NodeId, scale: f32);
    /// Material opacity. Values at or below zero render fully transparent.
    fn set_opacity(&mut self, node: NodeId, opacity: f32);
    fn set_visible(&mut self, node: NodeId, visible: bool);
}

/// Last written state of one node in a [`HeadlessScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeState {
    pub kind: NodeKind,
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: f32,
    pub opacity: f32,
    pub visible: bool,
}

impl NodeState {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: 1.0,
            opacity: 1.0,
            visible: true,
        }
    }
}

/// In-memory scene that records node state. Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    nodes: HashMap<NodeId, NodeState>,
    next_id: u32,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.get(&id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of live nodes of one kind.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.values().filter(|n| n.kind == kind).count()
    }

    fn with_node(&mut self, id: NodeId, f: impl FnOnce(&mut NodeState)) {
        if let Some(node) = self.nodes.get_mut(&id) {
            f(node);
        }
    }
}

impl SceneGraph for HeadlessScene {
    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, NodeState::new(kind));
        id
    }

    fn remove_node(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }

    fn set_position(&mut self, node: NodeId, position: Vec3) {
        self.with_node(node, |n| n.position = position);
    }

    fn set_orientation(&mut self, node: NodeId, orientation: Quat) {
        self.with_node(node, |n| n.orientation = orientation);
    }

    fn set_scale(&mut self, node: NodeId, scale: f32) {
        self.with_node(node, |n| n.scale = scale);
    }

    fn set_opacity(&mut self, node: NodeId, opacity: f32) {
        self.with_node(node, |n| n.opacity = opacity);
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.with_node(node, |n| n.visible = visible);
    }
}
