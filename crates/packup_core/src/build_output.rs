use packup_common::{ChunkId, ModuleId};

use crate::{Asset, Chunk, ModuleRegistry};

/// Everything a completed build hands back to the caller: the built entry
/// set, the canonical module records (moved out of the build, never
/// cloned), the chunk set, the emitted file names, and the rendered assets.
#[derive(Debug)]
pub struct BuildOutput {
  pub entries: Vec<(ChunkId, ModuleId)>,
  pub modules: ModuleRegistry,
  pub chunks: Vec<Chunk>,
  pub files: Vec<String>,
  pub assets: Vec<Asset>,
}
