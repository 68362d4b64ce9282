//! Configuration for the obra client and CLI.
//!
//! Config files are discovered from `./obra.{toml,yaml,yml,json}` or
//! `~/.config/obra/`, with `${ENV_VAR}` substitution applied to the raw
//! text before parsing.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    env_subst::substitute_env,
    loader::{
        clear_config_dir, config_dir, discover_and_load, load_config, set_config_dir,
    },
    schema::{ApiConfig, ObraConfig},
};
