#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod chord;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod finger;
mod fret;
#[cfg(feature = "std")]
mod logging;
mod neck;

pub use chord::*;
pub use common::*;
pub use config::*;
pub use finger::*;
pub use fret::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use neck::*;
