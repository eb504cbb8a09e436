pub mod tracker;
pub mod guard;
pub mod operand;
pub mod ops;

pub use tracker::*;
pub use guard::*;
pub use operand::*;
