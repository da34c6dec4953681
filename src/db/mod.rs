mod pool;
pub mod schema;

pub use pool::Database;
