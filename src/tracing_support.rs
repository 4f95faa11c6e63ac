//! Tracing support for the graph algorithms.
//!
//! Algorithm entry points open `info_span!`s (e.g. `dijkstra`, `has_cycle`)
//! carrying the size of the input.  When the `tracing` feature is enabled this
//! module re-exports `tracing::info_span` and provides [`init_tracing`], which
//! installs a subscriber that prints events and records per-span timings.
//! When the feature is disabled, the same names resolve to no-op
//! replacements so call sites need no `cfg` attributes.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, SpanTiming>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Accumulated time spent in all closed spans sharing a name.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|timings| {
                        let mut timings = timings.borrow_mut();
                        let entry = timings.entry(name).or_default();
                        entry.total += elapsed;
                        entry.count += 1;
                    });
                }
            }
        }
    }

    /// Installs the global subscriber: a formatting layer writing through the
    /// test harness plus the span timing layer.  Safe to call repeatedly; only
    /// the first call has an effect, and an already installed subscriber is
    /// left in place.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(tracing_subscriber::fmt::layer().with_test_writer())
                .with(TimingLayer)
                .try_init();
        });
    }

    /// Returns the timings recorded on the current thread, by span name.
    pub fn span_timings() -> BTreeMap<&'static str, SpanTiming> {
        SPAN_TIMINGS.with(|timings| timings.borrow().clone())
    }

    /// Clears the timings recorded on the current thread.
    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|timings| timings.borrow_mut().clear());
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        let mut entries: Vec<_> = span_timings().into_iter().collect();
        entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        eprintln!("span timings (desc):");
        for (name, timing) in entries {
            eprintln!("  {name}: {:?} ({}x)", timing.total, timing.count);
        }
    }

    // Re-export tracing macros for convenience
    pub use tracing::info_span;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::{collections::BTreeMap, time::Duration};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> BTreeMap<&'static str, SpanTiming> {
        BTreeMap::new()
    }

    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        // No-op when tracing is disabled
    }

    // Provide a no-op macro replacement for info_span
    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub use info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
