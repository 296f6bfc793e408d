// src/animation/chain.rs
//
// Fixed chain of nodes, one per palette color.
// Stored as a flat vec; neighbours are index arithmetic.

use super::AnimationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainDirection {
    Forward,
    Backward,
}

impl ChainDirection {
    pub fn flip(self) -> Self {
        match self {
            ChainDirection::Forward => ChainDirection::Backward,
            ChainDirection::Backward => ChainDirection::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Moved(usize),
    Boundary,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: AnimationState,
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    /// Builds `count` nodes (at least one), each with its own idle state.
    pub fn new(count: usize, step: f32) -> Self {
        let nodes = (0..count.max(1))
            .map(|index| Node {
                index,
                state: AnimationState::new(step),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn next_of(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.nodes.len()).then_some(next)
    }

    pub fn prev_of(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }

    pub fn get_next(&self, index: usize, direction: ChainDirection) -> Traversal {
        let neighbour = match direction {
            ChainDirection::Forward => self.next_of(index),
            ChainDirection::Backward => self.prev_of(index),
        };
        match neighbour {
            Some(next) => Traversal::Moved(next),
            None => Traversal::Boundary,
        }
    }
}
