pub mod graph;
pub mod record;
pub mod rule;

pub use graph::*;
pub use record::*;
pub use rule::*;
