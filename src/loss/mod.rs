pub mod sse;
pub mod cross_entropy;
pub mod loss_type;

pub use sse::SseLoss;
pub use cross_entropy::CrossEntropyLoss;
pub use loss_type::LossType;
