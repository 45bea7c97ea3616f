use ver_config::VerConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VerConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VerConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() {
        if has_env_prefix(&env_keys, "VERIDIAN_GEMINI") {
            warnings.push(
                "Gemini API key appears unset while VERIDIAN_GEMINI* env vars exist. Use double underscores (example: VERIDIAN_GEMINI__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "Gemini API key is not set; analyses will be recorded as ANALYSIS_FAILED. Set GEMINI_API_KEY or API_KEY."
                    .to_string(),
            );
        }
    }

    if config.store.path.trim().is_empty()
        && env_keys
            .iter()
            .any(|key| key.starts_with("VERIDIAN_STORE") && key != "VERIDIAN_STORE__PATH")
    {
        warnings.push(
            "Store path appears default while VERIDIAN_STORE* env vars exist. Use double underscores (example: VERIDIAN_STORE__PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
