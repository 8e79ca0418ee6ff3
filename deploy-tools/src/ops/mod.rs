// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use accounts::accounts;
pub use deploy::deploy;

mod accounts;
mod deploy;
