pub mod bridge;
pub mod deploy;
pub mod roles;
