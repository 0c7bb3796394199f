pub mod import_returns;
pub mod initdb;
pub mod serve;

pub use import_returns::import_returns;
pub use initdb::init_database;
pub use serve::serve;
