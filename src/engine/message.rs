use rtrb::Consumer;

use crate::graph::SfxVoice;

/// UI -> audio thread traffic. Voices travel by value: the UI side builds
/// the whole graph, the audio side owns it until it finishes.
pub enum SfxMessage {
    Play(SfxVoice),
}

/// Abstracts the mixer's inbox so tests can feed it without a ring buffer.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SfxMessage>;
}

impl MessageReceiver for Consumer<SfxMessage> {
    fn pop(&mut self) -> Option<SfxMessage> {
        Consumer::pop(self).ok()
    }
}

#[cfg(test)]
impl MessageReceiver for std::collections::VecDeque<SfxMessage> {
    fn pop(&mut self) -> Option<SfxMessage> {
        self.pop_front()
    }
}
