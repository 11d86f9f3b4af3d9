// config.rs
pub const DEFAULT_DATABASE_URL: &str = "sqlite://posts.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// `.env` 를 먼저 읽고 `DATABASE_URL` 사용
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        Self { database_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_database_url_when_set() {
        let config = Config::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "postgres://board@localhost/board".to_owned())
        });
        assert_eq!(config.database_url, "postgres://board@localhost/board");
    }

    #[test]
    fn falls_back_to_local_sqlite() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);

        let blank = Config::from_lookup(|_| Some("  ".to_owned()));
        assert_eq!(blank.database_url, DEFAULT_DATABASE_URL);
    }
}
