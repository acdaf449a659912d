pub mod auth;
pub mod edge;

pub use auth::{authorize, require_admin, require_auth, Access, AuthUser};
pub use edge::{edge_redirect, EdgeDecision, EdgeGate};
