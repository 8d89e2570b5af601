//! Call sites for the `log` facade. Without the `logging` feature they expand
//! to empty blocks and the crate does not depend on `log` at all.

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            ::log::trace!(target: "circular_list", $($arg)+);
        }
    }};
}

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            ::log::debug!(target: "circular_list", $($arg)+);
        }
    }};
}
