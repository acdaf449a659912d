// handlers/public/mod.rs - Public handlers (no authentication required)

pub mod root;
pub mod session;

pub use root::{health, not_found, root};
pub use session::logout;
