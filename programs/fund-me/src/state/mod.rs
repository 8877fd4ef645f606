pub mod ledger;
pub mod price_feed;

pub use ledger::*;
pub use price_feed::*;
