pub mod math;
pub mod oracle;
pub mod transfer;

pub use math::*;
pub use oracle::*;
pub use transfer::*;
