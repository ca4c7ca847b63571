//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's `model`)
//! - Services (API worker channel, credential store, clipboard)
//! - Handlers (in src/handlers/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod credentials;
pub(crate) mod file_ops;
pub(crate) mod navigation;
pub(crate) mod registry_ops;
