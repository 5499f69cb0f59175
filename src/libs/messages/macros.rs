//! Macros for printing [`Message`](super::Message) values.
//!
//! Every macro checks debug mode once per process. In debug mode output goes
//! through `tracing` so it interleaves with the API client's debug logs;
//! otherwise it is plain `println!`/`eprintln!`.
//!
//! Debug mode is on when either variable is set:
//! - **`TASKDESK_DEBUG`**: application-specific flag
//! - **`RUST_LOG`**: standard filter for `tracing-subscriber`
//!
//! ```rust
//! use taskdesk::libs::messages::Message;
//! use taskdesk::{msg_error, msg_success};
//!
//! msg_success!(Message::TaskCreated);
//! msg_error!(Message::FetchTasksFailed);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `TASKDESK_DEBUG` or `RUST_LOG` is set. Cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDESK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix. Pass `true` to pad it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints to stderr (or `tracing::error!` in debug mode).
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message without printing it.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
