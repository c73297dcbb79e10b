// ABOUTME: Library root for erachat — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod config;
pub mod reply;
pub mod session;
pub mod tui;
