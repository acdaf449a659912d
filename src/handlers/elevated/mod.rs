// handlers/elevated/mod.rs - Elevated handlers (admin role required)
//
// Route Prefix: /api/admin/*
// Middleware: require_admin (full credential verification + role == "admin")
//
// Any admin may act on any user id taken from the path; there is no
// ownership check and no audit trail beyond the request log.

pub mod users;

pub use users::toggle_status;
