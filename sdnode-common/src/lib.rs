//! Common functionality shared among other sdnode crates.
//!
//! Most users will have no reason to depend on this crate directly, as it is re-exported by
//! `sdnode-node`.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, missing_copy_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod channel;
pub mod constants;
pub mod fixed;
pub mod pins;
pub mod traits;

pub use channel::{Channel, InvalidChannelError};
pub use pins::{Mapping, PinFunction};
