pub mod contributor;
pub mod rate_limit;
pub mod search;
pub mod user;

pub use contributor::*;
pub use rate_limit::*;
pub use search::*;
pub use user::*;
