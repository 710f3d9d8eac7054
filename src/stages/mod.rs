pub mod stage0_aggregate;
pub mod stage1_partition;
pub mod stage2_persist;

pub use stage0_aggregate::*;
pub use stage1_partition::*;
pub use stage2_persist::*;
