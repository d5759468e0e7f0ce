use resizer_atoms::resize::ResizeConfig;
use std::env;

pub const SOURCE_BUCKET_VAR: &str = "SOURCE_BUCKET";
pub const DESTINATION_BUCKET_VAR: &str = "DESTINATION_BUCKET";

/// Fixed resize settings, with bucket names overridable from the environment.
pub fn resize_config_from_env() -> ResizeConfig {
    resize_config_from(|name| env::var(name).ok())
}

fn resize_config_from(lookup: impl Fn(&str) -> Option<String>) -> ResizeConfig {
    let defaults = ResizeConfig::default();
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    ResizeConfig {
        source_bucket: non_empty(SOURCE_BUCKET_VAR).unwrap_or(defaults.source_bucket),
        destination_bucket: non_empty(DESTINATION_BUCKET_VAR)
            .unwrap_or(defaults.destination_bucket),
        ..ResizeConfig::default()
    }
}
