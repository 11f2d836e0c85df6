mod expense;
mod ledger;
mod member;
mod money;

pub use expense::*;
pub use ledger::*;
pub use member::*;
pub use money::*;
