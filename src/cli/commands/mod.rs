//! CLI command implementations

pub mod available;
pub mod config;
pub mod explain;
pub mod fingerprint;
pub mod import;
pub mod ingredients;
pub mod stock;

pub use available::execute as available;
pub use config::execute as config;
pub use explain::execute as explain;
pub use fingerprint::execute as fingerprint;
pub use import::execute as import;
pub use ingredients::execute as ingredients;
pub use stock::execute as stock;

use crate::cli::args::PolicyArgs;
use crate::config::Config;
use crate::engine::Policy;

/// Configured policy with command-line overrides switched on top
pub(crate) fn effective_policy(config: &Config, overrides: &PolicyArgs) -> Policy {
    Policy::new(
        config.policy.allow_substitutes || overrides.allow_substitutes,
        config.policy.ignore_garnish || overrides.ignore_garnish,
    )
}
