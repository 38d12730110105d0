//! Infrastructure layer implementing domain interfaces.
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
