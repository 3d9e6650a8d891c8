//! Domain utilities

pub mod ident;
pub mod serde;

pub use ident::eq_ignore_case;
