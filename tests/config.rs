#[cfg(test)]
mod tests {
    use taskdesk::libs::config::{normalize_base_url, Config, ServerConfig, API_URL_ENV, DEFAULT_API_URL};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the home/appdata directory at a temporary location for each test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://tasks.example.com".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.server.is_none());
        assert_eq!(ServerConfig::default().api_url, DEFAULT_API_URL);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_then_save_and_read(ctx: &mut ConfigTestContext) {
        // No file yet: defaults
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());

        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.server.unwrap().api_url, ctx.api_url);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://localhost:8080/ "), "http://localhost:8080");
        assert_eq!(normalize_base_url("https://tasks.example.com//"), "https://tasks.example.com");
        assert_eq!(normalize_base_url("https://tasks.example.com"), "https://tasks.example.com");
    }

    #[test]
    fn test_api_url_resolution_order() {
        std::env::remove_var(API_URL_ENV);

        assert_eq!(Config::default().api_url(), DEFAULT_API_URL);

        let config = Config {
            server: Some(ServerConfig {
                api_url: "https://configured.example.com/".to_string(),
            }),
        };
        assert_eq!(config.api_url(), "https://configured.example.com");

        std::env::set_var(API_URL_ENV, "https://env.example.com/");
        assert_eq!(config.api_url(), "https://env.example.com");

        std::env::set_var(API_URL_ENV, "  ");
        assert_eq!(config.api_url(), "https://configured.example.com");

        std::env::remove_var(API_URL_ENV);
    }
}
