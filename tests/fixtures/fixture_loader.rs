/// Fixture loader
///
/// Entries are either a case object or a plain string used as a section
/// comment. Fields left out of a case are not checked.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum FixtureCase {
    /// A URL case
    UrlCase {
        input: String,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        user: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        path: Option<Vec<String>>,
        #[serde(default)]
        directory: Option<bool>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A section comment (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load the bundled fixture file
pub fn load_cases() -> Vec<FixtureCase> {
    serde_json::from_str(include_str!("url_cases.json")).expect("fixture file is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let url_cases = cases
            .iter()
            .filter(|case| matches!(case, FixtureCase::UrlCase { .. }))
            .count();
        assert!(url_cases > 20);
        assert!(matches!(cases[0], FixtureCase::Comment(_)));
    }

    #[test]
    fn test_parse_minimal_case() {
        let cases: Vec<FixtureCase> =
            serde_json::from_str(r#"["comment", {"input": "/a", "failure": true}]"#).unwrap();
        assert_eq!(cases.len(), 2);
        match &cases[1] {
            FixtureCase::UrlCase {
                input,
                failure,
                host,
                ..
            } => {
                assert_eq!(input, "/a");
                assert_eq!(*failure, Some(true));
                assert_eq!(*host, None);
            }
            FixtureCase::Comment(_) => panic!("expected a URL case"),
        }
    }
}
