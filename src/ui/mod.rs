//! Terminal output helpers
//!
//! Uses `cliclack` for styled output in interactive terminals and falls back
//! to plain bracketed prefixes (`[OK]`, `[WARN]`, ...) when piped or in CI.

mod context;
mod output;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, outro_success, outro_warn, remark, step_error_detail, step_info, step_ok,
    step_ok_detail, step_warn, step_warn_hint,
};
pub use theme::{init_theme, BarbackTheme};
