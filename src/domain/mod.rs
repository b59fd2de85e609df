mod ledger;
mod login_form;
mod money;
mod transaction;

pub use ledger::*;
pub use login_form::*;
pub use money::*;
pub use transaction::*;
