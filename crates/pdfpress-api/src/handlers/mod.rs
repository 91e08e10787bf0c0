//! Route handlers organized by domain.

pub mod convert;
pub mod health;
