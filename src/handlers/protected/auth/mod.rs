// handlers/protected/auth/mod.rs - Session introspection for authenticated users

pub mod whoami;

pub use whoami::whoami;
