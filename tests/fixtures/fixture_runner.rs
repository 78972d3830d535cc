use super::fixture_loader::{FixtureCase, FixtureFailure, FixtureResult, load_cases};
/// Fixture runner
///
/// Runs every case in the fixture file against `packed_url`
use packed_url::Url;

fn check<T: PartialEq + std::fmt::Debug>(
    result: &mut Vec<FixtureFailure>,
    case_num: usize,
    input: &str,
    field: &str,
    expected: Option<T>,
    actual: T,
) -> bool {
    match expected {
        Some(expected) if expected != actual => {
            result.push(FixtureFailure {
                case_num,
                input: input.to_string(),
                field: field.to_string(),
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
            false
        }
        _ => true,
    }
}

/// Run fixture cases and return results
pub fn run_fixtures(cases: Vec<FixtureCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut case_num = 0;

    for case in cases {
        let FixtureCase::UrlCase {
            input,
            href,
            scheme,
            user,
            host,
            port,
            path,
            directory,
            query,
            fragment,
            failure,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let url = match (Url::parse(&input), failure == Some(true)) {
            (Err(_), true) => {
                result.passed += 1;
                continue;
            }
            (Ok(_), true) => {
                result.failed += 1;
                result.failures.push(FixtureFailure {
                    case_num,
                    input,
                    field: "parsing".to_string(),
                    expected: "failure".to_string(),
                    actual: "success".to_string(),
                });
                continue;
            }
            (Err(err), false) => {
                result.failed += 1;
                result.failures.push(FixtureFailure {
                    case_num,
                    input,
                    field: "parsing".to_string(),
                    expected: "success".to_string(),
                    actual: err.to_string(),
                });
                continue;
            }
            (Ok(url), false) => url,
        };

        let failures = &mut result.failures;
        let checks = [
            check(failures, case_num, &input, "href", href, url.to_string()),
            check(
                failures,
                case_num,
                &input,
                "scheme",
                scheme.map(Some),
                url.scheme().map(|s| s.as_str().to_string()),
            ),
            check(
                failures,
                case_num,
                &input,
                "user",
                user.map(Some),
                url.user().map(|u| u.into_owned()),
            ),
            check(
                failures,
                case_num,
                &input,
                "host",
                host.map(Some),
                url.host().map(|h| h.to_string()),
            ),
            check(failures, case_num, &input, "port", port.map(Some), url.port()),
            check(
                failures,
                case_num,
                &input,
                "path",
                path,
                url.path_segments()
                    .into_iter()
                    .map(|s| s.into_owned())
                    .collect::<Vec<_>>(),
            ),
            check(
                failures,
                case_num,
                &input,
                "directory",
                directory,
                url.has_directory_path(),
            ),
            check(
                failures,
                case_num,
                &input,
                "query",
                query.map(Some),
                url.query().map(|q| q.into_owned()),
            ),
            check(
                failures,
                case_num,
                &input,
                "fragment",
                fragment.map(Some),
                url.fragment().map(|f| f.into_owned()),
            ),
        ];

        if checks.iter().all(|&ok| ok) {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        let result = run_fixtures(load_cases());

        println!("\n=== Fixture Results ===");
        println!("{}", result.summary());
        for failure in &result.failures {
            println!(
                "  #{} {:?} [{}]: expected {}, got {}",
                failure.case_num, failure.input, failure.field, failure.expected, failure.actual
            );
        }

        assert_eq!(result.failed, 0, "{}", result.summary());
        assert!(result.passed > 20);
    }

    #[test]
    fn test_runner_reports_mismatch() {
        let cases: Vec<FixtureCase> = serde_json::from_str(
            r#"[{"input": "http://h/", "host": "other"}, {"input": "/ok", "failure": true}]"#,
        )
        .unwrap();
        let result = run_fixtures(cases);
        assert_eq!(result.passed, 0);
        assert_eq!(result.failed, 2);
        assert_eq!(result.failures[0].field, "host");
        assert_eq!(result.failures[1].field, "parsing");
    }
}
