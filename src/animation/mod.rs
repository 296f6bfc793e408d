pub mod animator;
pub mod chain;
pub mod path;
pub mod state;

pub use animator::Animator;
pub use chain::{ChainDirection, Node, NodeChain, Traversal};
pub use path::ShapePath;
pub use state::{AnimationState, StateUpdate};
