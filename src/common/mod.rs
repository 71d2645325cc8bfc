//! Common types and utilities shared across hashpt.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`PageTableConfig`](config::PageTableConfig)
//! - Error types
//! - Identifiers (PageNumber, FrameNumber) and addresses

mod address;
pub mod config;
pub mod error;
mod frame_number;
mod page_number;

pub use address::{PhysicalAddress, VirtualAddress};
pub use error::{Error, Result};
pub use frame_number::FrameNumber;
pub use page_number::PageNumber;
