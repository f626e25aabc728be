//! Template substitution — filling placeholder tokens in the two fixed
//! shader templates.

use std::collections::BTreeMap;

/// Named replacement texts, keyed by placeholder name. A key `Foo` replaces
/// every `<Foo>` token in the template. BTreeMap keeps the processing order
/// deterministic.
pub type Definitions = BTreeMap<&'static str, String>;

/// Replace every placeholder token in `template`, processing one key to
/// exhaustion before moving to the next.
///
/// Precondition: no replacement text may itself contain an unresolved
/// placeholder token, otherwise substitution for that key cannot terminate.
/// Under that precondition the loop is bounded by the finite occurrence
/// count of each token, and no defined token survives in the output.
pub fn substitute(template: &str, definitions: &Definitions) -> String {
    let mut code = template.to_string();
    for (key, value) in definitions {
        let token = format!("<{key}>");
        while let Some(at) = code.find(&token) {
            code.replace_range(at..at + token.len(), value);
        }
    }
    code
}
