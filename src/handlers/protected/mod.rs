// handlers/protected/mod.rs - Protected handlers (verified credential required)
//
// Route Prefix: /api/*
// Middleware: require_auth, which injects the caller's AuthUser

pub mod auth;
pub mod skills;

pub use auth::whoami;
pub use skills::skill_delete;
