// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the capture pipeline depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Capture and UI layers use the ports, never concrete adapters

pub mod port;
