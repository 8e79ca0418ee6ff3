// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the Template contract.
//!
//! Deploy scripts receive a [`RuntimeEnvironment`] carrying a
//! [`DeploymentRegistrar`](core::deployment::DeploymentRegistrar) and a
//! [`NamedAccountResolver`](core::accounts::NamedAccountResolver). [`ops::deploy`] wires both to a
//! JSON-RPC provider and runs [`scripts::all`].

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod environment;
pub mod ops;
pub mod scripts;
pub mod utils;

pub use environment::RuntimeEnvironment;
pub use error::{Error, Result};
