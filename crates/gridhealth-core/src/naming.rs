use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[JAILED ]<target> - [<env>]`, e.g. `JAILED //pkg/foo:test - [linux amd64]`.
    /// Whitespace is ASCII only (tab, newline, form feed, carriage return, space).
    static ref TEST_NAME_ENV: Regex = Regex::new(
        r"(JAILED )?(/?/?[A-Za-z0-9/_\-.:}{]+) - \[([A-Za-z0-9/:\-_.\t\n\f\r ]+)\][\t\n\f\r ]*"
    )
    .unwrap();
}

/// Splits a grid row name into `(base name, environment)`.
///
/// Names that do not follow the `name - [env]` convention keep their full name
/// and fall back to the tab name as their environment.
pub fn split_name_and_env(test_name: &str, tab_name: &str) -> (String, String) {
    if let Some(caps) = TEST_NAME_ENV.captures(test_name) {
        return (caps[2].to_string(), caps[3].to_string());
    }
    tracing::info!(
        test = %test_name,
        tab = %tab_name,
        "test name could not be split into name and env, using tab name as its env"
    );
    (test_name.to_string(), tab_name.to_string())
}
