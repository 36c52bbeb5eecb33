use crate::archive::{ArchiveEntry, PackageArchive};
use crate::error::PackagingError;
use crate::layout::PackageLayout;
use crate::readme::render_readme;
use crate::runner::render_runner;

/// Builds distributable archives from a compiled binary and its source.
#[derive(Clone, Debug)]
pub struct ArtifactPackager {
    layout: PackageLayout,
    entry_point: String,
}

impl Default for ArtifactPackager {
    fn default() -> Self {
        Self::new(PackageLayout::default(), "main")
    }
}

impl ArtifactPackager {
    pub fn new(layout: PackageLayout, entry_point: impl Into<String>) -> Self {
        Self {
            layout,
            entry_point: entry_point.into(),
        }
    }

    pub fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    /// Package `binary` and `source` together with a runner page and README.
    ///
    /// Identical inputs always produce identical archive bytes.
    pub fn package(&self, binary: &[u8], source: &str) -> Result<PackageArchive, PackagingError> {
        if let Some(name) = self.layout.first_duplicate() {
            return Err(PackagingError::DuplicateEntry(name.to_string()));
        }
        let entries = vec![
            ArchiveEntry::new(self.layout.module.as_str(), binary),
            ArchiveEntry::new(self.layout.source.as_str(), source),
            ArchiveEntry::new(
                self.layout.runner.as_str(),
                render_runner(&self.layout, &self.entry_point),
            ),
            ArchiveEntry::new(self.layout.readme.as_str(), render_readme(&self.layout)),
        ];
        let archive = PackageArchive::build(entries)?;
        tracing::debug!(
            entries = archive.entries().len(),
            size = archive.bytes().len(),
            hash = %archive.hash(),
            "package built"
        );
        Ok(archive)
    }
}
