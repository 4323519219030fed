//! Deterministic, file-system-safe names derived from arbitrary strings.
//!
//! Generated data files are named after the string that identifies them
//! (for example `category/docs-tutorialsidebar-category-guides`). The name
//! keeps a readable kebab-case prefix and ends with a short content hash so
//! that strings which kebab-case to the same prefix still get distinct files.

/// Maximum length, in bytes, of a single path segment on common file systems.
pub const MAX_PATH_SEGMENT_BYTES: usize = 255;

/// Bytes kept free for an extension such as `.json`, and for `-` plus the
/// short hash when a name must be shortened.
const SPACE_FOR_APPENDING: usize = 10;

/// Length of the hash suffix appended by [`docu_hash`].
const SHORT_HASH_LEN: usize = 3;

/// Return the first `len` hex characters of the blake3 digest of `s`.
///
/// `len` is clamped to the full digest length (64).
///
/// # Examples
///
/// ```
/// use folio_core::simple_hash;
///
/// let h = simple_hash("category/guides", 3);
/// assert_eq!(h.len(), 3);
/// assert_eq!(h, simple_hash("category/guides", 3));
/// ```
pub fn simple_hash(s: &str, len: usize) -> String {
    let hex = blake3::hash(s.as_bytes()).to_hex();
    let len = len.min(hex.len());
    hex.as_str()[..len].to_string()
}

/// Convert a string to lowercase kebab-case.
///
/// Words are split on any non-alphanumeric character, on lower-to-upper
/// case transitions, at the end of an uppercase acronym, and between
/// letters and digits.
///
/// # Examples
///
/// ```
/// use folio_core::kebab_case;
///
/// assert_eq!(kebab_case("category/Getting Started"), "category-getting-started");
/// assert_eq!(kebab_case("XMLHttpRequest"), "xml-http-request");
/// assert_eq!(kebab_case("version2"), "version-2");
/// ```
pub fn kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let next = chars.get(i + 1).copied();
            let boundary = !current.is_empty()
                && ((prev.is_lowercase() && c.is_uppercase())
                    || (prev.is_alphabetic() != c.is_alphabetic())
                    || (prev.is_uppercase()
                        && c.is_uppercase()
                        && next.is_some_and(char::is_lowercase)));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Compute a readable, collision-resistant file name stem for `s`.
///
/// - `"/"` maps to `"index"`.
/// - Otherwise the result is `"{kebab_case(s)}-{hash}"` where `hash` is a
///   3-character blake3 prefix of `s`.
/// - Names that would leave fewer than 10 bytes of a
///   [`MAX_PATH_SEGMENT_BYTES`] segment free have their kebab-case part
///   truncated (on a char boundary) before the hash is appended, so a file
///   extension still fits.
///
/// # Examples
///
/// ```
/// use folio_core::docu_hash;
///
/// assert_eq!(docu_hash("/"), "index");
/// assert!(docu_hash("category/guides").starts_with("category-guides-"));
/// ```
pub fn docu_hash(s: &str) -> String {
    if s == "/" {
        return "index".to_string();
    }

    let short_hash = simple_hash(s, SHORT_HASH_LEN);
    let kebab = kebab_case(s);
    let name = format!("{kebab}-{short_hash}");
    if name.len() + SPACE_FOR_APPENDING <= MAX_PATH_SEGMENT_BYTES {
        return name;
    }

    format!(
        "{}-{short_hash}",
        truncate_on_char_boundary(&kebab, MAX_PATH_SEGMENT_BYTES - SPACE_FOR_APPENDING)
    )
}

fn truncate_on_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
