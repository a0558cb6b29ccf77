//! MCP tool handlers for QMS server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod change_status;
pub mod list;
pub mod normalize;
pub mod taxonomies;
