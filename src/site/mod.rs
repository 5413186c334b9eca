//! Installed-package enumeration from site directories.
//!
//! The host environment's package metadata is read once per run: site
//! directories are either named explicitly or discovered with a single query
//! of the environment's Python interpreter, then each directory's
//! `*.dist-info` / `*.egg-info` entries are collected into a map from
//! canonical key to installed package. No network, no retries.

pub mod package;
pub mod scan;

pub use package::InstalledPackage;
pub use scan::{discover_site_dirs, scan_sites};
