#![deny(unsafe_code)]
//! # playground-packager
//!
//! Bundles a compiled module for offline use.
//!
//! [`ArtifactPackager::package`] produces a gzip-compressed tar holding, in
//! order, the `.wasm` binary, the original source, a standalone HTML runner
//! and a README. The archive is assembled in memory and is byte-for-byte
//! reproducible: every header field that could vary (mtime, owner, mode) is
//! pinned.

pub mod archive;
pub mod error;
pub mod layout;
pub mod packager;
pub mod readme;
pub mod runner;

pub use archive::{unpack, ArchiveEntry, PackageArchive};
pub use error::PackagingError;
pub use layout::PackageLayout;
pub use packager::ArtifactPackager;
pub use readme::render_readme;
pub use runner::render_runner;
