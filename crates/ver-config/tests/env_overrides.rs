use figment::Jail;
use ver_config::VerConfig;

#[test]
fn gemini_api_key_env_fills_config() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "key-from-gemini-var");

        let config = VerConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "key-from-gemini-var");
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn bare_api_key_env_fills_config() {
    Jail::expect_with(|jail| {
        jail.set_env("API_KEY", "key-from-bare-var");

        let config = VerConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "key-from-bare-var");
        Ok(())
    });
}

#[test]
fn gemini_api_key_beats_bare_api_key() {
    Jail::expect_with(|jail| {
        jail.set_env("API_KEY", "bare");
        jail.set_env("GEMINI_API_KEY", "gemini");

        let config = VerConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "gemini");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_bare_api_key() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "gemini");
        jail.set_env("VERIDIAN_GEMINI__API_KEY", "prefixed");

        let config = VerConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "prefixed");
        Ok(())
    });
}

#[test]
fn store_path_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("VERIDIAN_STORE__PATH", "/tmp/vrd/engagements.json");

        let config = VerConfig::load().expect("config loads");
        assert_eq!(config.store.path, "/tmp/vrd/engagements.json");
        Ok(())
    });
}
