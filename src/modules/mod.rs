//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence adapters used by the feature services.

pub mod storage;
