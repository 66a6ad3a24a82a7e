use crate::dsp::curve::Curve;
use crate::graph::{amplify::Amplify, filter::FilterNode, mix::Mix, node::SfxNode, through::Through};

/// Fluent combinators for wiring recipe graphs:
/// `source.through(filter).amplify(gain_curve)`.
pub trait NodeExt: SfxNode + Sized {
    fn through(self, filter: FilterNode) -> Through<Self> {
        Through::new(self, filter)
    }

    fn amplify(self, gain: Curve) -> Amplify<Self> {
        Amplify::new(self, gain)
    }

    fn mix<M: SfxNode>(self, source: M) -> Mix<Self, M> {
        Mix::new(self, source)
    }
}

impl<T: SfxNode> NodeExt for T {}
