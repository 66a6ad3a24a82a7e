/// Core trait for nodes in a disposable sound graph.
///
/// A graph is built on the UI thread when a sound is triggered, handed to
/// the audio thread, rendered block by block, and dropped once finished.
/// Nodes therefore carry their own clocks (elapsed samples since trigger)
/// instead of receiving absolute time from outside.
pub trait SfxNode: Send {
    fn render_block(&mut self, out: &mut [f32], sample_rate: f32);

    /// True once the node will only ever produce silence.
    ///
    /// The mixer uses this to reclaim the voice; a node that can't tell
    /// (a pass-through filter) returns false and lets its source decide.
    fn is_finished(&self) -> bool {
        false
    }
}

/// Allow boxed nodes to be used as graph nodes (for dynamic dispatch)
impl SfxNode for Box<dyn SfxNode> {
    fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        (**self).render_block(out, sample_rate)
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}
