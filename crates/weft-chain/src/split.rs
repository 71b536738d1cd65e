//! Chunk splitting configuration and stable chunk identity.

use indexmap::IndexMap;
use serde::Serialize;
use weft_config::Pattern;

use crate::rule::STORE_SEGMENT;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitChunks {
    pub cache_groups: IndexMap<String, CacheGroup>,
}

/// Which chunks a cache group may pull modules out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    Initial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheGroup {
    pub name: String,
    pub chunks: ChunkSelection,
    pub priority: i32,
    /// Membership test; `None` accepts any module
    pub test: Option<VendorTest>,
    pub min_chunks: Option<u32>,
    pub reuse_existing_chunk: bool,
}

/// Decides whether a module belongs to the vendor chunk.
///
/// `add` forces inclusion and `remove` forces exclusion, in that order,
/// before falling back to "lives in the package store".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VendorTest {
    pub add: Option<Pattern>,
    pub remove: Option<Pattern>,
}

impl VendorTest {
    pub fn new(add: Option<Pattern>, remove: Option<Pattern>) -> Self {
        Self { add, remove }
    }

    /// `resource` is the module's file path; synthetic modules have none.
    pub fn matches(&self, resource: Option<&str>) -> bool {
        let Some(resource) = resource else {
            return false;
        };
        if self.add.as_ref().is_some_and(|p| p.is_match(resource)) {
            return true;
        }
        if self.remove.as_ref().is_some_and(|p| p.is_match(resource)) {
            return false;
        }
        STORE_SEGMENT.is_match(resource)
    }
}

/// Stable identifier for a chunk.
///
/// Named chunks keep their name. Unnamed chunks are identified by a hash of
/// their module ids joined with `_`, so a chunk's id changes only when its
/// own membership changes.
pub fn chunk_id<S: AsRef<str>>(name: Option<&str>, module_ids: &[S]) -> String {
    if let Some(name) = name {
        return name.to_string();
    }
    let joined = module_ids
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("_");
    format!("{:08x}", seahash::hash(joined.as_bytes()) & 0xffff_ffff)
}
