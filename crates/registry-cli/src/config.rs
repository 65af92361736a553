//! Configuration loading: defaults, then `--config`, then `UC_*`
//! environment variables, then command-line flags.

use username_registry::{ConfigError, RegistryConfig};

use crate::cli::Args;

pub fn load_config(args: &Args) -> Result<RegistryConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => RegistryConfig::from_json_file(path)?,
        None => RegistryConfig::default(),
    };

    config.apply_env_overrides();
    apply_flags(&mut config, args);
    config.validate()?;

    Ok(config)
}

fn apply_flags(config: &mut RegistryConfig, args: &Args) {
    if let Some(path) = &args.names_file {
        config.names_file = path.clone();
    }
    if let Some(n) = args.min_registered {
        config.min_registered = n;
    }
    if let Some(bits) = args.filter_bits {
        config.filter.size_bits = bits;
    }
    if let Some(k) = args.hash_count {
        config.filter.hash_count = k;
    }
}
