//! Name conversions used for generated paths and markdown anchors.

/// Suffix stripped from trait names before deriving feature file names.
const TRAIT_SUFFIX: &str = "Trait";

/// Convert a camel-case name to snake case.
///
/// Every uppercase letter after the first character starts a new word, with
/// no acronym grouping: `HTTPRequest` → `h_t_t_p_request`. A digit run that
/// follows a letter starts a new word too: `Field2Name` → `field_2_name`.
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if let Some(p) = prev {
            let boundary = (c.is_uppercase() && p != '_')
                || (c.is_ascii_digit() && p.is_alphabetic());
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

/// Feature file stem for a trait: `FileDownloadTrait` → `file_download`.
pub fn feature_name(trait_name: &str) -> String {
    let base = trait_name.strip_suffix(TRAIT_SUFFIX).unwrap_or(trait_name);
    camel_to_snake(base)
}

/// Heading anchor for a trait section.
pub fn anchor(trait_name: &str) -> String {
    trait_name.to_lowercase()
}
