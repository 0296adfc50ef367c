use crate::{Asset, Chunk, Graph, OutputOptions};

/// Turns a finished graph into chunks and rendered assets. Pure with
/// respect to the filesystem; writing is the bundler's job.
pub struct Bundle<'a> {
  output_options: &'a OutputOptions,
  graph: &'a Graph,
}

impl<'a> Bundle<'a> {
  pub(crate) fn new(output_options: &'a OutputOptions, graph: &'a Graph) -> Self {
    Self {
      output_options,
      graph,
    }
  }

  pub(crate) fn generate(&self) -> (Vec<Chunk>, Vec<Asset>) {
    let mut chunks = self.generate_chunks();
    chunks
      .iter_mut()
      .for_each(|chunk| chunk.gen_file_name(self.output_options));

    let assets = chunks
      .iter()
      .map(|chunk| {
        tracing::debug!(
          "rendering chunk {} ({} modules)",
          chunk.id,
          chunk.modules.len()
        );
        Asset {
          filename: chunk.filename.clone().unwrap(),
          content: chunk.render(&self.graph.registry),
        }
      })
      .collect::<Vec<_>>();

    (chunks, assets)
  }

  fn generate_chunks(&self) -> Vec<Chunk> {
    self
      .graph
      .entries
      .iter()
      .map(|(chunk_id, entry_id)| {
        Chunk::from_entry(chunk_id.clone(), entry_id.clone(), &self.graph.registry)
      })
      .collect()
  }
}
