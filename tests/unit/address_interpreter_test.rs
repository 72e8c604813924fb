//! Unit tests for address-bar input interpretation.

use rstest::rstest;

use quantum_browser::services::address_interpreter::{
    with_scheme, AddressInterpreter, NavigationTarget,
};
use quantum_browser::types::settings::GeneralSettings;

const SEARCH: &str = "https://www.google.com/search?q=";

#[test]
fn test_empty_input_is_ignored() {
    let interpreter = AddressInterpreter::default();
    assert_eq!(interpreter.interpret(""), None);
}

#[rstest]
#[case("openai chatgpt", "https://www.google.com/search?q=openai chatgpt")]
#[case("localhost", "https://www.google.com/search?q=localhost")]
#[case("a.b c", "https://www.google.com/search?q=a.b c")]
#[case("rust", "https://www.google.com/search?q=rust")]
#[case(" ", "https://www.google.com/search?q= ")]
fn test_search_inputs(#[case] input: &str, #[case] expected: &str) {
    let interpreter = AddressInterpreter::default();
    assert_eq!(
        interpreter.interpret(input),
        Some(NavigationTarget::Search(expected.to_string()))
    );
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("news.ycombinator.com/item?id=1", "https://news.ycombinator.com/item?id=1")]
#[case(".", "https://.")]
#[case("ftp.example.org", "https://ftp.example.org")]
#[case("http://x.com", "http://x.com")]
#[case("https://rust-lang.org", "https://rust-lang.org")]
#[case("httpbin.org", "httpbin.org")]
fn test_address_inputs(#[case] input: &str, #[case] expected: &str) {
    let interpreter = AddressInterpreter::default();
    assert_eq!(
        interpreter.interpret(input),
        Some(NavigationTarget::Url(expected.to_string()))
    );
}

#[test]
fn test_search_text_is_not_encoded() {
    let interpreter = AddressInterpreter::default();
    let target = interpreter.interpret("c++ & rust").unwrap();
    assert!(target.is_search());
    assert_eq!(target.url(), format!("{}c++ & rust", SEARCH));
}

#[test]
fn test_custom_search_prefix_from_settings() {
    let general = GeneralSettings {
        search_url: "https://duckduckgo.com/?q=".to_string(),
        ..GeneralSettings::default()
    };
    let interpreter = AddressInterpreter::from_settings(&general);
    assert_eq!(interpreter.search_url(), "https://duckduckgo.com/?q=");
    assert_eq!(
        interpreter.interpret("ferris").map(NavigationTarget::into_url),
        Some("https://duckduckgo.com/?q=ferris".to_string())
    );
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("http://x.com", "http://x.com")]
#[case("https://rust-lang.org", "https://rust-lang.org")]
fn test_with_scheme(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(with_scheme(input), expected);
}
