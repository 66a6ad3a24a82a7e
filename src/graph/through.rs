use crate::graph::{filter::FilterNode, node::SfxNode};

/// Serial chain: source renders into the buffer, the filter processes it
/// in place. Lifetime is the source's - the filter tail after the source
/// stops is a handful of samples at these cutoffs and decays below the
/// exponential-ramp floor immediately.
pub struct Through<S> {
    source: S,
    filter: FilterNode,
}

impl<S> Through<S> {
    pub fn new(source: S, filter: FilterNode) -> Self {
        Self { source, filter }
    }
}

impl<S: SfxNode> SfxNode for Through<S> {
    fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        self.source.render_block(out, sample_rate);
        self.filter.render_block(out, sample_rate);
    }

    fn is_finished(&self) -> bool {
        self.source.is_finished()
    }
}
