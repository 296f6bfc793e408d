// src/animation/path.rs
//
// Cursor over the node chain. Forwards draw/update to the current node and
// walks the chain when a node finishes its transition, bouncing at the ends.

use log::debug;
use nannou::prelude::*;

use super::{ChainDirection, Node, NodeChain, StateUpdate, Traversal};
use crate::render::ShapeRenderer;

#[derive(Debug, Clone)]
pub struct ShapePath {
    chain: NodeChain,
    curr: usize,
    dir: ChainDirection,
}

impl ShapePath {
    pub fn new(chain: NodeChain) -> Self {
        Self {
            chain,
            curr: 0,
            dir: ChainDirection::Forward,
        }
    }

    pub fn current(&self) -> &Node {
        // curr is only ever set from chain traversal, so it is always in range
        match self.chain.node(self.curr) {
            Some(node) => node,
            None => unreachable!("path cursor {} outside chain", self.curr),
        }
    }

    fn current_mut(&mut self) -> &mut Node {
        let curr = self.curr;
        match self.chain.node_mut(curr) {
            Some(node) => node,
            None => unreachable!("path cursor {} outside chain", curr),
        }
    }

    pub fn current_index(&self) -> usize {
        self.curr
    }

    pub fn direction(&self) -> ChainDirection {
        self.dir
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn draw(&self, draw: &Draw, shape: &ShapeRenderer) {
        let node = self.current();
        shape.draw(draw, node.index, node.state.scale);
    }

    pub fn start_updating(&mut self) -> bool {
        self.current_mut().state.start_updating()
    }

    pub fn update(&mut self) -> StateUpdate {
        let result = self.current_mut().state.update();
        if result == StateUpdate::Completed {
            self.advance();
        }
        result
    }

    fn advance(&mut self) {
        match self.chain.get_next(self.curr, self.dir) {
            Traversal::Moved(next) => {
                debug!("path moved {} -> {}", self.curr, next);
                self.curr = next;
            }
            Traversal::Boundary => {
                self.dir = self.dir.flip();
                debug!("path hit boundary at {}, now {:?}", self.curr, self.dir);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_current(path: &mut ShapePath) {
        assert!(path.start_updating());
        assert_eq!(path.update(), StateUpdate::Completed);
    }

    #[test]
    fn test_starts_at_first_node_forward() {
        let path = ShapePath::new(NodeChain::new(5, 1.0));
        assert_eq!(path.current_index(), 0);
        assert_eq!(path.direction(), ChainDirection::Forward);
    }

    #[test]
    fn test_walks_forward_then_flips_at_end() {
        let mut path = ShapePath::new(NodeChain::new(5, 1.0));

        for expected in 1..5 {
            complete_current(&mut path);
            assert_eq!(path.current_index(), expected);
            assert_eq!(path.direction(), ChainDirection::Forward);
        }

        // last node completes, stays put, direction flips
        complete_current(&mut path);
        assert_eq!(path.current_index(), 4);
        assert_eq!(path.direction(), ChainDirection::Backward);

        // the last node now rests at 1, so the next tap retreats it
        assert!(path.start_updating());
        assert_eq!(path.current().state.dir, -1.0);
        assert_eq!(path.update(), StateUpdate::Completed);
        assert_eq!(path.current_index(), 3);
    }

    #[test]
    fn test_update_without_start_is_idle() {
        let mut path = ShapePath::new(NodeChain::new(5, 1.0));
        assert_eq!(path.update(), StateUpdate::Idle);
        assert_eq!(path.current_index(), 0);
    }

    #[test]
    fn test_in_progress_does_not_move_cursor() {
        let mut path = ShapePath::new(NodeChain::new(5, 0.5));
        path.start_updating();
        assert_eq!(path.update(), StateUpdate::InProgress);
        assert_eq!(path.current_index(), 0);
        assert_eq!(path.update(), StateUpdate::Completed);
        assert_eq!(path.current_index(), 1);
    }

    #[test]
    fn test_full_round_trip_returns_to_start() {
        let mut path = ShapePath::new(NodeChain::new(5, 1.0));
        // 5 forward completions, then 5 backward completions
        for _ in 0..10 {
            complete_current(&mut path);
        }
        assert_eq!(path.current_index(), 0);
        assert_eq!(path.direction(), ChainDirection::Forward);
        assert!(path.chain().node(0).map(|n| n.state.prev_scale) == Some(0.0));
    }
}
