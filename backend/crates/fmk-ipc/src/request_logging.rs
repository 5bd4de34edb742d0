/// Log a handler entry point
#[macro_export]
macro_rules! log_handler_entry {
    ($ctx:expr, $handler:expr) => {
        log::debug!(
            "{} -> {} handler ({})",
            $ctx.log_prefix(),
            $handler,
            $ctx.correlation_id
        );
    };
}

/// Log a handler exit with duration
#[macro_export]
macro_rules! log_handler_exit {
    ($ctx:expr, $handler:expr, $result:expr) => {
        match &$result {
            Ok(_) => log::info!(
                "{} <- {} OK ({}ms)",
                $ctx.log_prefix(),
                $handler,
                $ctx.elapsed_ms()
            ),
            Err(e) => log::warn!(
                "{} <- {} ERR: {} ({}ms)",
                $ctx.log_prefix(),
                $handler,
                e,
                $ctx.elapsed_ms()
            ),
        }
    };
}
