use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub session_ttl_hours: i64,
    pub demo_password: String,
    pub web_portal_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            session_ttl_hours: 24,
            demo_password: "password".to_string(),
            web_portal_url: "http://10.0.2.2:5000".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.session_ttl_hours);

        // Shared development credential accepted for every seeded account.
        let demo_password = env::var("DEMO_PASSWORD").unwrap_or(defaults.demo_password);

        // Served to mobile clients via GET /config; the default targets the
        // Android emulator's host alias.
        let web_portal_url = env::var("WEB_PORTAL_URL").unwrap_or(defaults.web_portal_url);

        Ok(Config {
            port,
            session_ttl_hours,
            demo_password,
            web_portal_url,
        })
    }
}
