/// Derives the lower-camel schema key of a type name.
///
/// The first character is lower-cased and `-` separators are dropped, so a
/// modifier named `MultipleOf` contributes its argument under `multipleOf`.
///
/// ```
/// use wtypes_util::lower_key;
///
/// assert_eq!(lower_key("MultipleOf"), "multipleOf");
/// assert_eq!(lower_key("Content-Encoding"), "contentEncoding");
/// assert_eq!(lower_key(""), "");
/// ```
pub fn lower_key(name: &str) -> String {
    let mut chars = name.chars().filter(|c| *c != '-');
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
