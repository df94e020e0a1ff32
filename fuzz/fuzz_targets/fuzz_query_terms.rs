#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The filter operand must always fit the store's arity
    let terms = fleetdex::query::prepare_search_terms(data);
    assert!(terms.len() <= fleetdex::query::MAX_QUERY_TERMS);
});
