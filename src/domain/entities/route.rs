//! Current page location.

use reqwest::Url;

const LOCAL_ORIGIN: &str = "http://localhost";

/// Location the login screen was opened at, with its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedRoute {
    path: String,
    query: Vec<(String, String)>,
}

impl ActivatedRoute {
    /// Parses a path such as `/login?next=%2Fdashboard` or a full URL.
    ///
    /// Unparseable input yields the bare path with no query parameters.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let parsed = Url::parse(location).or_else(|_| {
            Url::parse(LOCAL_ORIGIN).and_then(|origin| origin.join(location))
        });

        match parsed {
            Ok(url) => Self {
                path: url.path().to_string(),
                query: url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
            },
            Err(_) => Self {
                path: location.to_string(),
                query: Vec::new(),
            },
        }
    }

    /// Returns the route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the first non-empty value of a query parameter.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

impl Default for ActivatedRoute {
    fn default() -> Self {
        Self::parse("/login")
    }
}
