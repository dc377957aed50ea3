#[cfg(feature = "tracing")]
macro_rules! sbtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollbars", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sbtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sbdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollbars", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sbdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sbwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scrollbars", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sbwarn {
    ($($tt:tt)*) => {};
}
