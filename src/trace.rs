//! Span and event hooks for the correlation entry points.
//!
//! `circular_correlation` opens a `circular_correlation` span carrying the
//! series length `n` and closes with an event holding both circular means and
//! the coefficient; the parallel variant does the same under its own span
//! name. Subscribers filter on the `circstat` target.
//!
//! Building without the `tracing` feature turns every hook into a no-op, so
//! the statistics themselves never depend on a subscriber being installed.

#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

// Span fields are dropped unevaluated.
#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// `trace_event!("message", key = value, ...)` records computed values at
/// info level.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($msg:literal, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!($($key = $value),+, $msg)
    };
    ($msg:literal) => {
        tracing::info!($msg)
    };
}

// Values are still evaluated so bindings used only for tracing stay used.
#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($msg:literal, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($msg:literal) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Guard returned by `trace_span!` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Same shape as `tracing::Span::entered`, so `let _span = trace_span!(..).entered();`
    /// compiles either way.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
