//! Extman - CMS extension manager
//!
//! A facade over the site's external package engine. The engine owns the
//! hard parts — dependency resolution, version constraint solving, lockfile
//! consistency, downloads and installation; extman marshals configuration,
//! builds per-verb commands lazily, and captures the engine's output for
//! the caller.
//!
//! The [`manager::PackageManager`] is the entry point: one method per
//! package verb (require, remove, update, search, show, dump-autoload),
//! constructed from an [`manager::environment::Environment`] and an
//! [`engine::EngineFactory`]. The bundled [`engine::ProcessEngineFactory`]
//! drives an external engine binary; anything implementing the traits in
//! [`engine`] can stand in for it.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod manager;
pub mod output;
