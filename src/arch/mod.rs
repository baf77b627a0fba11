//! # Architecture Ports
//!
//! Hardware-specific building blocks for board implementations. The
//! Cortex-M tick source is compiled only for bare-metal ARM targets, so
//! the game core stays testable on the host.

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub mod cortex_m;
