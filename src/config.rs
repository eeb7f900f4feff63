use std::io::Read;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub port: u16,

    /// Verbose diagnostics: logs the derived domain scope and the cookie
    /// names being expired on every logout.
    #[serde(default)]
    pub debug: bool,

    /// Domain family shown on the conductor page, each triggering its own
    /// origin's /logout.
    #[serde(default)]
    pub domains: Vec<String>,

    /// Path scopes covered by cookie expiration. Extend this when a
    /// deployment is known to set path-scoped cookies (e.g. "/api").
    #[serde(default = "default_expire_paths")]
    pub expire_paths: Vec<String>,

    /// Send Clear-Site-Data on secure logouts.
    #[serde(default = "default_clear_site_data")]
    pub clear_site_data: bool,

    /// Also emit SameSite=None expiration variants, for deployments setting
    /// cross-site cookies.
    #[serde(default)]
    pub expire_same_site_none: bool,

    /// Expose the /lab cookie matrix used by the end-to-end tests.
    #[serde(default)]
    pub cookie_lab: bool,
}

fn default_expire_paths() -> Vec<String> {
    vec!["/".to_owned()]
}

fn default_clear_site_data() -> bool {
    true
}

impl Config {
    pub fn read_from_file() -> color_eyre::Result<Self> {
        let mut file = std::fs::File::open("config.toml")?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config: Config = toml::from_str("port = 8000").unwrap();

        assert_eq!(config.port, 8000);
        assert!(!config.debug);
        assert!(config.domains.is_empty());
        assert_eq!(config.expire_paths, vec!["/"]);
        assert!(config.clear_site_data);
        assert!(!config.expire_same_site_none);
        assert!(!config.cookie_lab);
    }

    #[test]
    fn full_config_round_trips() {
        let config: Config = toml::from_str(
            r#"
                port = 8443
                debug = true
                domains = ["a.example.com", "b.example.com"]
                expire_paths = ["/", "/api"]
                clear_site_data = false
                expire_same_site_none = true
                cookie_lab = true
            "#,
        )
        .unwrap();

        assert!(config.debug);
        assert_eq!(config.domains.len(), 2);
        assert_eq!(config.expire_paths, vec!["/", "/api"]);
        assert!(!config.clear_site_data);
        assert!(config.expire_same_site_none);
        assert!(config.cookie_lab);
    }
}
