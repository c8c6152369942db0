pub mod spec;
pub mod snapshot;
pub mod weights;

pub use spec::NetworkSpec;
pub use snapshot::WeightSnapshot;
pub use weights::{UpdateRates, WeightStore};
