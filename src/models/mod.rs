pub mod user;
pub mod repository;
pub mod score;
pub mod analysis;

pub use user::*;
pub use repository::*;
pub use score::*;
pub use analysis::*;
