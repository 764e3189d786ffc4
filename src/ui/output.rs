//! Step-by-step CLI output
//!
//! Every line is a [`Step`] of some kind. Fancy terminals route it through
//! the matching `cliclack::log` call; plain output prefixes a bracketed tag.

use super::context::UiContext;
use console::{style, StyledObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Ok,
    Warn,
    Miss,
    Info,
}

impl Step {
    fn tag(self) -> StyledObject<&'static str> {
        match self {
            Self::Ok => style("[OK]").green(),
            Self::Warn => style("[WARN]").yellow(),
            Self::Miss => style("[MISS]").red(),
            Self::Info => style("[INFO]").cyan(),
        }
    }

    fn emit(self, ctx: &UiContext, message: &str) {
        if !ctx.use_fancy_output() {
            println!("  {} {}", self.tag(), message);
            return;
        }
        let shown = match self {
            Self::Ok => cliclack::log::success(message),
            Self::Warn => cliclack::log::warning(message),
            Self::Miss => cliclack::log::error(message),
            Self::Info => cliclack::log::info(message),
        };
        shown.ok();
    }
}

/// `detail` dimmed on fancy terminals, verbatim otherwise
fn soft(ctx: &UiContext, detail: &str) -> String {
    if ctx.use_fancy_output() {
        style(detail).dim().to_string()
    } else {
        detail.to_string()
    }
}

/// Title line opening a command's output
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).yellow().bold()).ok();
    } else {
        println!("{}\n", style(title).bold());
    }
}

/// Closing verdict, green
pub fn outro_success(ctx: &UiContext, message: &str) {
    outro(ctx, Step::Ok, style(message).green().bold(), message);
}

/// Closing verdict, yellow
pub fn outro_warn(ctx: &UiContext, message: &str) {
    outro(ctx, Step::Warn, style(message).yellow().bold(), message);
}

fn outro(ctx: &UiContext, kind: Step, fancy: StyledObject<&str>, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::outro(fancy).ok();
    } else {
        println!("\n{} {}", kind.tag(), message);
    }
}

pub fn step_ok(ctx: &UiContext, message: &str) {
    Step::Ok.emit(ctx, message);
}

/// `message (detail)`
pub fn step_ok_detail(ctx: &UiContext, message: &str, detail: &str) {
    Step::Ok.emit(ctx, &format!("{} ({})", message, soft(ctx, detail)));
}

pub fn step_warn(ctx: &UiContext, message: &str) {
    Step::Warn.emit(ctx, message);
}

/// `message - hint`
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    Step::Warn.emit(ctx, &format!("{} - {}", message, soft(ctx, hint)));
}

/// A recipe line or key that could not be satisfied: `message: detail`
pub fn step_error_detail(ctx: &UiContext, message: &str, detail: &str) {
    let detail = if ctx.use_fancy_output() {
        style(detail).red().to_string()
    } else {
        detail.to_string()
    };
    Step::Miss.emit(ctx, &format!("{}: {}", message, detail));
}

pub fn step_info(ctx: &UiContext, message: &str) {
    Step::Info.emit(ctx, message);
}

/// Untagged aside, e.g. a line left out of the availability check
pub fn remark(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::remark(message).ok();
    } else {
        println!("  {}", style(message).dim());
    }
}

/// Indented `key: value` line
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    println!("  {}: {}", soft(ctx, key), value);
}
