#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Fields<'a> {
    fields: Vec<Option<&'a str>>,
}

fuzz_target!(|input: Fields| {
    // Keyword generation must never panic and never emit blank keywords
    let keywords = fleetdex::index::generate_search_keywords_from_fields(&input.fields);
    assert!(keywords.iter().all(|k| !k.trim().is_empty()));

    for field in input.fields.iter().flatten() {
        let _ = fleetdex::utils::tokenize(field);
        let _ = fleetdex::utils::progressive_prefixes(field);
    }
});
