//! Internal logging helpers for structured condition events.

/// Single logging target for the condition catalog.
pub(crate) const LOG_TARGET: &str = "scan_conditions";

/// Emits `event=<name> <fields>` records on [`LOG_TARGET`].
///
/// Formatting is skipped entirely when the level is disabled, so the macro is
/// safe to leave on per-chunk paths.
macro_rules! conditions_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use conditions_log;
