//! Slug derivation for post titles.
//!
//! Lossy, deterministic transform: lowercase, runs of non-alphanumerics
//! collapse to a single `-`, leading and trailing separators dropped.

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Village -- Profile!! 2024"), "village-profile-2024");
        assert_eq!(slugify("a/b\\c"), "a-b-c");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  Hello  "), "hello");
        assert_eq!(slugify("--hello--"), "hello");
    }

    #[test]
    fn is_deterministic() {
        let title = "Pembangunan Balai Desa, Tahap II";
        assert_eq!(slugify(title), slugify(title));
        assert_eq!(slugify(title), "pembangunan-balai-desa-tahap-ii");
    }

    #[test]
    fn empty_and_symbol_only_titles_yield_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
