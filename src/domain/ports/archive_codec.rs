//! Archive Codec Port
//!
//! Packs an artifact directory into the tenant's archive format and unpacks
//! downloaded content. The zip implementation is supplied by the caller.

use std::path::Path;

/// Archive encoding of artifact directories
pub trait ArchiveCodec {
    /// Encode the contents of `dir`
    fn pack(&self, dir: &Path) -> anyhow::Result<Vec<u8>>;

    /// Decode `content` into `dir`, creating it if needed
    fn unpack(&self, content: &[u8], dir: &Path) -> anyhow::Result<()>;
}
