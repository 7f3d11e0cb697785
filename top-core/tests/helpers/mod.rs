
mod models;
pub use self::models::*;

mod sources;
pub use self::sources::*;
