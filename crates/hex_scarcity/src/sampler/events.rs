//! Event types and sinks for observing sampling passes.
//!
//! This module defines [`SampleEvent`] and a set of sinks and adapters to emit,
//! collect, filter, or forward events while running
//! [`crate::sampler::runner::HexGridSampler::sample_with_events`] or
//! [`crate::sampler::runner::sample_with_events`].
use crate::sampler::result::SamplingSummary;
use crate::sampler::Tile;
use crate::sampling::Scarcity;

/// Describes events emitted by a sampling pass.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SampleEvent {
    /// Emitted once validation passed and before the first draw.
    SamplingStarted {
        /// Number of tiles that will be sampled.
        tile_count: usize,
        /// Scarcity of the pass.
        scarcity: Scarcity,
        /// Number of resource categories.
        category_count: usize,
    },

    /// Emitted after a tile received its category.
    TileSampled {
        /// Position of the tile in layout order.
        index: usize,
        /// The sampled tile.
        tile: Tile,
    },

    /// Emitted when the pass completes.
    SamplingFinished {
        /// Tallies of the finished pass.
        summary: SamplingSummary,
    },

    /// Valid but degenerate input.
    Warning {
        /// Context string (e.g. `scarcity`, `categories`).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl SampleEvent {
    pub fn kind(&self) -> SampleEventKind {
        match self {
            SampleEvent::SamplingStarted { .. } => SampleEventKind::SamplingStarted,
            SampleEvent::TileSampled { .. } => SampleEventKind::TileSampled,
            SampleEvent::SamplingFinished { .. } => SampleEventKind::SamplingFinished,
            SampleEvent::Warning { .. } => SampleEventKind::Warning,
        }
    }
}

/// Discriminant of [`SampleEvent`], used by sinks to opt in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleEventKind {
    SamplingStarted,
    TileSampled,
    SamplingFinished,
    Warning,
}

/// A generic event sink that accepts [`SampleEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SampleEvent);

    /// Whether events of `kind` should be built at all. Defaults to `true`.
    fn wants(&self, _kind: SampleEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = SampleEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SampleEvent) {}

    #[inline]
    fn wants(&self, _kind: SampleEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SampleEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SampleEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SampleEvent),
{
    #[inline]
    fn send(&mut self, event: SampleEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SampleEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<SampleEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SampleEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SampleEvent) {
        self.events.push(event);
    }
}

/// Wraps another sink and only lets the listed kinds through.
pub struct KindFilterSink<S: EventSink> {
    inner: S,
    allowed: Vec<SampleEventKind>,
}

impl<S: EventSink> KindFilterSink<S> {
    pub fn new(inner: S, allowed: impl IntoIterator<Item = SampleEventKind>) -> Self {
        Self {
            inner,
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for KindFilterSink<S> {
    fn send(&mut self, event: SampleEvent) {
        if self.wants(event.kind()) {
            self.inner.send(event);
        }
    }

    fn wants(&self, kind: SampleEventKind) -> bool {
        self.allowed.contains(&kind) && self.inner.wants(kind)
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SampleEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: SampleEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> SampleEvent {
        SampleEvent::Warning {
            context: context.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::with_capacity(2);
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(warning("b"));
        assert_eq!(sink.len(), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn unit_sink_wants_nothing() {
        let sink = ();
        assert!(!sink.wants(SampleEventKind::TileSampled));
        assert!(!sink.wants(SampleEventKind::Warning));
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(warning("ctx"));
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
        assert!(matches!(
            multi.sinks[0].as_slice()[0],
            SampleEvent::Warning { .. }
        ));
    }

    #[test]
    fn filter_sink_drops_unlisted_kinds() {
        let mut sink = KindFilterSink::new(VecSink::new(), [SampleEventKind::Warning]);
        assert!(sink.wants(SampleEventKind::Warning));
        assert!(!sink.wants(SampleEventKind::TileSampled));
        sink.send(warning("kept"));
        sink.send(SampleEvent::SamplingStarted {
            tile_count: 1,
            scarcity: Scarcity::DEFAULT,
            category_count: 1,
        });
        let inner = sink.into_inner();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner.as_slice()[0].kind(), SampleEventKind::Warning);
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning("ctx"));
        sink.send_many([warning("a"), warning("b")]);
        assert_eq!(count, 3);
    }
}
