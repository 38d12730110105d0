//! Repository trait definitions for the domain layer.
//!
//! Traits here describe data access contracts; implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated with `mockall`
//! for unit tests.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
