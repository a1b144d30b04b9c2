pub mod auth;
pub mod extract;
pub mod headers;
pub mod inbound;
