//! Cache policy resolution

pub mod configured;

pub use configured::ConfiguredPolicyResolver;
