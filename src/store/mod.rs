//! Data access layer. `directory` owns employee identity, `ledger` owns
//! attendance state and consults the directory before every write.

pub mod directory;
pub mod ledger;
