//! Selector scoping for per-instance duotone filters.
//!
//! A block type declares which of its elements receive the duotone filter
//! (for an image block, something like `img`). To apply a filter to a single
//! block instance, each declared selector is compounded with the instance's
//! class and placed under the editor canvas wrapper, which gives the rule a
//! higher specificity than theme or global duotone rules.

/// Ancestor selector of the editor canvas.
pub const EDITOR_WRAPPER_SELECTOR: &str = ".editor-styles-wrapper";

/// Turns a scope token into a class selector.
///
/// Tokens already written as class selectors are returned unchanged.
///
/// ```rust
/// use duotone::class_selector;
///
/// assert_eq!(class_selector("wp-duotone-3"), ".wp-duotone-3");
/// assert_eq!(class_selector(".wp-duotone-3"), ".wp-duotone-3");
/// ```
pub fn class_selector(token: &str) -> String {
    let token = token.trim();
    if token.is_empty() || token.starts_with('.') {
        token.to_string()
    } else {
        format!(".{}", token)
    }
}

/// Scopes a block type's filter selectors to one instance.
///
/// Both inputs are comma separated lists. Every scope is combined with every
/// selector, scope-major, by concatenating the trimmed parts without a
/// combinator so the result is a compound selector on the same element. When
/// only one part is non-empty it is used alone; two empty parts give an
/// empty entry. Non-empty entries are placed under
/// [`EDITOR_WRAPPER_SELECTOR`].
///
/// # Example
///
/// ```rust
/// use duotone::compute_scoped_duotone_selectors;
///
/// assert_eq!(
///     compute_scoped_duotone_selectors(".wp-duotone-1,.wp-duotone-2", "a,b"),
///     ".editor-styles-wrapper .wp-duotone-1a,\
/// .editor-styles-wrapper .wp-duotone-1b,\
/// .editor-styles-wrapper .wp-duotone-2a,\
/// .editor-styles-wrapper .wp-duotone-2b",
/// );
/// ```
pub fn compute_scoped_duotone_selectors(scope_token: &str, selector_list: &str) -> String {
    let scopes: Vec<String> = scope_token.split(',').map(class_selector).collect();
    let selectors: Vec<&str> = selector_list.split(',').map(str::trim).collect();

    let mut scoped = Vec::with_capacity(scopes.len() * selectors.len());
    for scope in &scopes {
        for selector in &selectors {
            let compound = compound_selector(scope, selector);
            if compound.is_empty() {
                scoped.push(compound);
            } else {
                scoped.push(format!("{} {}", EDITOR_WRAPPER_SELECTOR, compound));
            }
        }
    }

    scoped.join(",")
}

fn compound_selector(scope: &str, selector: &str) -> String {
    match (scope.is_empty(), selector.is_empty()) {
        (false, false) => format!("{}{}", scope, selector),
        (false, true) => scope.to_string(),
        (true, false) => selector.to_string(),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scope_single_selector() {
        assert_eq!(
            compute_scoped_duotone_selectors(".wp-duotone-1", "filter.duotone-sel"),
            ".editor-styles-wrapper .wp-duotone-1filter.duotone-sel"
        );
    }

    #[test]
    fn test_bare_token_becomes_class() {
        assert_eq!(
            compute_scoped_duotone_selectors("wp-duotone-7", " img"),
            ".editor-styles-wrapper .wp-duotone-7img"
        );
    }

    #[test]
    fn test_cartesian_product_scope_major() {
        assert_eq!(
            compute_scoped_duotone_selectors(".wp-duotone-1,.wp-duotone-2", "a,b"),
            ".editor-styles-wrapper .wp-duotone-1a,.editor-styles-wrapper .wp-duotone-1b,\
.editor-styles-wrapper .wp-duotone-2a,.editor-styles-wrapper .wp-duotone-2b"
        );
    }

    #[test]
    fn test_parts_are_trimmed() {
        assert_eq!(
            compute_scoped_duotone_selectors(" .s ", " .a , .b "),
            ".editor-styles-wrapper .s.a,.editor-styles-wrapper .s.b"
        );
    }

    #[test]
    fn test_empty_selector_uses_scope_alone() {
        assert_eq!(
            compute_scoped_duotone_selectors(".s", "a,"),
            ".editor-styles-wrapper .sa,.editor-styles-wrapper .s"
        );
    }

    #[test]
    fn test_empty_scope_uses_selector_alone() {
        assert_eq!(
            compute_scoped_duotone_selectors("", "img"),
            ".editor-styles-wrapper img"
        );
    }

    #[test]
    fn test_both_empty_emit_empty_entry() {
        assert_eq!(compute_scoped_duotone_selectors("", ""), "");
        assert_eq!(
            compute_scoped_duotone_selectors(",.s", ","),
            ",,.editor-styles-wrapper .s,.editor-styles-wrapper .s"
        );
    }

    #[test]
    fn test_class_selector_trims() {
        assert_eq!(class_selector("  a "), ".a");
        assert_eq!(class_selector(""), "");
    }
}
