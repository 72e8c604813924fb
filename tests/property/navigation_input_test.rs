//! Property-based tests for address-bar input classification.
//!
//! For any non-empty input, the interpreter yields exactly one of a search
//! URL or an address URL, and the classification follows the space/dot rule.

use proptest::prelude::*;
use quantum_browser::services::address_interpreter::{AddressInterpreter, NavigationTarget};

const SEARCH: &str = "https://www.google.com/search?q=";

fn arb_host() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}(\\.[a-z]{2,6}){1,2}(/[a-z0-9]{0,8})?"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn input_with_space_is_always_search(a in "[^ ]{0,10}", b in "[^ ]{0,10}") {
        let input = format!("{} {}", a, b);
        let target = AddressInterpreter::default().interpret(&input).unwrap();
        prop_assert_eq!(target, NavigationTarget::Search(format!("{}{}", SEARCH, input)));
    }

    #[test]
    fn input_without_dot_is_always_search(input in "[^.]{1,30}") {
        let target = AddressInterpreter::default().interpret(&input).unwrap();
        prop_assert!(target.is_search());
        prop_assert!(target.url().ends_with(input.as_str()));
    }

    #[test]
    fn bare_host_gets_https_prefix(host in arb_host()) {
        prop_assume!(!host.starts_with("http"));
        let target = AddressInterpreter::default().interpret(&host).unwrap();
        prop_assert_eq!(target, NavigationTarget::Url(format!("https://{}", host)));
    }

    #[test]
    fn explicit_scheme_is_kept(host in arb_host(), secure in any::<bool>()) {
        let scheme = if secure { "https" } else { "http" };
        let input = format!("{}://{}", scheme, host);
        let target = AddressInterpreter::default().interpret(&input).unwrap();
        prop_assert_eq!(target, NavigationTarget::Url(input));
    }

    #[test]
    fn non_empty_input_always_resolves(input in ".{1,40}") {
        let target = AddressInterpreter::default().interpret(&input);
        prop_assert!(target.is_some());
        let url = target.unwrap().into_url();
        prop_assert!(url.starts_with("http") || url == input);
    }
}
