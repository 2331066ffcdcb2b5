use std::fmt;

/// A lower-cased, dot-prefixed file name suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedExtension(String);

impl NormalizedExtension {
    pub fn new(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.starts_with('.') {
            Self(lower)
        } else {
            Self(format!(".{}", lower))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `file_name` must already be lower-cased.
    fn is_suffix_of(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.0)
    }
}

impl fmt::Display for NormalizedExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered extensions a search matches against. Duplicates are kept.
///
/// Renders as `[".cpp", ".h"]`; the banner and the log header both use this form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<NormalizedExtension>,
}

impl ExtensionSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: raw
                .into_iter()
                .map(|ext| NormalizedExtension::new(ext.as_ref()))
                .collect(),
        }
    }

    pub fn matches_file_name(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| ext.is_suffix_of(&lower))
    }

    /// First extension the file name ends with, in search order.
    pub fn matching_extension(&self, file_name: &str) -> Option<&NormalizedExtension> {
        let lower = file_name.to_lowercase();
        self.extensions.iter().find(|ext| ext.is_suffix_of(&lower))
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, ext) in self.extensions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\"", ext)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_is_case_insensitive() {
        let expected = NormalizedExtension::new(".cpp");
        assert_eq!(NormalizedExtension::new("CPP"), expected);
        assert_eq!(NormalizedExtension::new("Cpp"), expected);
        assert_eq!(NormalizedExtension::new(".cpp"), expected);
        assert_eq!(expected.as_str(), ".cpp");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in ["md", ".TXT", "Tar.GZ", ""] {
            let once = NormalizedExtension::new(raw);
            let twice = NormalizedExtension::new(once.as_str());
            assert_eq!(once, twice, "normalizing {:?} twice changed it", raw);
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        let set = ExtensionSet::new(["cpp"]);

        assert!(set.matches_file_name("Foo.CPP"));
        assert!(set.matches_file_name("foo.cpp"));
        assert!(set.matches_file_name("foo.Cpp"));
        assert!(!set.matches_file_name("foo.cppx"));
        assert!(!set.matches_file_name("foo.txt"));
    }

    #[test]
    fn test_suffix_matching_spans_multiple_dots() {
        let set = ExtensionSet::new(["tar.gz"]);
        assert!(set.matches_file_name("archive.TAR.GZ"));
        assert!(!set.matches_file_name("archive.gz"));
    }

    #[test]
    fn test_any_extension_matches() {
        let set = ExtensionSet::new([".h", "CPP"]);
        assert!(set.matches_file_name("main.cpp"));
        assert!(set.matches_file_name("Lib.H"));
        assert!(!set.matches_file_name("README.md"));
        assert_eq!(
            set.matching_extension("Lib.H").map(|e| e.as_str()),
            Some(".h")
        );
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = ExtensionSet::new(Vec::<String>::new());
        assert!(set.is_empty());
        assert!(!set.matches_file_name("anything.cpp"));
        assert_eq!(set.to_string(), "[]");
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let set = ExtensionSet::new(["cpp", ".CPP", "h"]);
        assert_eq!(set.to_string(), r#"[".cpp", ".cpp", ".h"]"#);
    }
}
