//! Cascade Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Cascade overlap
//! layout engine and its front ends. It includes:
//!
//! - **Identifiers**: Per-occurrence task keys ([`identifier::TaskKey`])
//! - **Time**: Hour-of-day projection and wall-clock helpers ([`time`] module)
//! - **Tasks**: Task inputs and derived time intervals ([`task`] module)
//! - **Placement**: Per-task layout directives ([`placement`] module)

pub mod identifier;
pub mod placement;
pub mod task;
pub mod time;
