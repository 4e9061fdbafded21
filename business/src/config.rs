use ustr::Ustr;

/// Where the cars API lives.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// URL of the cars collection, used by list, create and delete alike.
    pub fn cars_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(format!("{base}/cars").as_str())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cars_url() {
        let config = BusinessConfig::default();

        assert_eq!(config.api_base_url, "http://localhost:3333");
        assert_eq!(config.cars_url(), Ustr::from("http://localhost:3333/cars"));
    }

    #[test]
    fn test_cars_url_ignores_trailing_slash() {
        let config = BusinessConfig::new("http://127.0.0.1:8080/".to_owned());
        assert_eq!(config.cars_url(), Ustr::from("http://127.0.0.1:8080/cars"));
    }
}
