mod errors;
mod interface;
mod transaction;

pub use errors::{DatabaseError, DatabaseErrorKind, Result};
pub use interface::DbService;
pub use transaction::DbTransaction;
