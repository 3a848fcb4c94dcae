//! Structured logging macros.
//!
//! Every block-scoped line carries the same field names so log pipelines
//! can join them: `component`, `block_height`, `block_hash`, and `stage`
//! where one applies.

/// Log a block-related event with standard fields.
///
/// ```rust,ignore
/// log_block_event!(info, "cli", "Block accepted", block.height, block.short_hash());
/// log_block_event!(warn, "cli", "Block rejected", block.height, block.short_hash(), reason = %err);
/// ```
#[macro_export]
macro_rules! log_block_event {
    ($level:ident, $component:expr, $msg:expr, $block_height:expr, $block_hash:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            block_height = $block_height,
            block_hash = %$block_hash,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log the result of a single validation stage with standard fields.
#[macro_export]
macro_rules! log_stage_event {
    ($level:ident, $component:expr, $msg:expr, $block_hash:expr, $stage:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            block_hash = %$block_hash,
            stage = %$stage,
            $($($field)*,)?
            $msg
        )
    };
}
