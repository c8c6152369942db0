pub mod patterns;

pub use patterns::{xor_patterns, Pattern, PatternSet};
