use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::{Compression, GzBuilder};
use playground_types::ContentHash;
use serde::{Deserialize, Serialize};
use tar::{Builder, EntryType, Header};

use crate::error::PackagingError;

const ENTRY_MODE: u32 = 0o644;

/// One named blob inside a package.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// A finished archive: its entries, the encoded `.tar.gz` bytes and their
/// BLAKE3 digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageArchive {
    entries: Vec<ArchiveEntry>,
    bytes: Vec<u8>,
    hash: ContentHash,
}

impl PackageArchive {
    /// Encode `entries` in order. Nothing is returned unless every entry was
    /// written and the stream finished cleanly.
    pub fn build(entries: Vec<ArchiveEntry>) -> Result<Self, PackagingError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(PackagingError::DuplicateEntry(entry.name.clone()));
            }
        }

        let gz = GzBuilder::new().write(Vec::new(), Compression::best());
        let mut tar = Builder::new(gz);
        for entry in &entries {
            let mut header = Header::new_gnu();
            header.set_entry_type(EntryType::Regular);
            header.set_size(entry.bytes.len() as u64);
            header.set_mode(ENTRY_MODE);
            header.set_mtime(0);
            header.set_uid(0);
            header.set_gid(0);
            tar.append_data(&mut header, &entry.name, entry.bytes.as_slice())
                .map_err(|e| serialization(&entry.name, e))?;
        }
        let gz = tar
            .into_inner()
            .map_err(|e| PackagingError::Serialization(e.to_string()))?;
        let bytes = finish(gz)?;
        let hash = ContentHash::hash(&bytes);
        Ok(Self {
            entries,
            bytes,
            hash,
        })
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&ArchiveEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Encoded `.tar.gz` bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn hash(&self) -> ContentHash {
        self.hash
    }
}

fn finish<W: Write>(gz: flate2::write::GzEncoder<W>) -> Result<W, PackagingError> {
    gz.finish()
        .map_err(|e| PackagingError::Serialization(e.to_string()))
}

fn serialization(name: &str, err: std::io::Error) -> PackagingError {
    PackagingError::Serialization(format!("{name}: {err}"))
}

/// Read a `.tar.gz` produced by [`PackageArchive::build`] back into its
/// entries, in archive order.
pub fn unpack(bytes: &[u8]) -> Result<Vec<ArchiveEntry>, PackagingError> {
    let corrupt = |e: std::io::Error| PackagingError::Corrupt(e.to_string());
    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    let mut entries = Vec::new();
    for entry in archive.entries().map_err(corrupt)? {
        let mut entry = entry.map_err(corrupt)?;
        let name = entry
            .path()
            .map_err(corrupt)?
            .to_string_lossy()
            .into_owned();
        // The header size is untrusted, so let the reader grow the buffer.
        let declared = entry.size();
        let mut data = Vec::new();
        entry.read_to_end(&mut data).map_err(corrupt)?;
        if data.len() as u64 != declared {
            return Err(PackagingError::Corrupt(format!(
                "{name}: header declares {declared} bytes, found {}",
                data.len()
            )));
        }
        entries.push(ArchiveEntry::new(name, data));
    }
    Ok(entries)
}
