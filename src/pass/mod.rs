//! One pattern's trip through the network: activations forward, deltas back.

pub mod forward;
pub mod backward;

pub use forward::ForwardPass;
pub use backward::BackwardPass;
