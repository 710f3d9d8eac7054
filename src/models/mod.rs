pub mod projection;
pub mod record;
pub mod table;

pub use projection::*;
pub use record::*;
pub use table::*;
