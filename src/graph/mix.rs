use crate::{graph::node::SfxNode, MAX_BLOCK_SIZE};

/// Parallel sum of two sources.
///
/// Both sources feed the same downstream gain stage, exactly like two
/// oscillators wired to one gain node. No balance weighting - the recipes
/// schedule their sources so they barely overlap (the success chime's
/// second tone starts as the first decays), so a plain sum cannot clip at
/// the volumes involved. Finished only when both sources are.
pub struct Mix<A, B> {
    pub source_a: A,
    pub source_b: B,
    temp_buffer: Vec<f32>,
}

impl<A, B> Mix<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Self {
            source_a,
            source_b,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: SfxNode, B: SfxNode> SfxNode for Mix<A, B> {
    fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        // Blocks larger than the temp buffer are rendered in chunks; the
        // sources keep their own clocks, so splitting a block is exact.
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.source_a.render_block(chunk, sample_rate);

            let frames = &mut self.temp_buffer[..chunk.len()];
            frames.fill(0.0);
            self.source_b.render_block(frames, sample_rate);

            for (o, b) in chunk.iter_mut().zip(frames.iter()) {
                *o += *b;
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.source_a.is_finished() && self.source_b.is_finished()
    }
}
