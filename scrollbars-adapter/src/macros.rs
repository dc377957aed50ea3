#[cfg(feature = "tracing")]
macro_rules! satrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollbars_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! satrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sadebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollbars_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sadebug {
    ($($tt:tt)*) => {};
}
