//! Language dispatch: map file extensions to profiles and build parsers.

use std::path::Path;

use tree_sitter::Parser;

use crate::core::errors::{DebtdroneError, Result};
use crate::lang::profile::LanguageProfile;
use crate::lang::profiles::ALL_PROFILES;

/// Return the profiles compiled into this build, in dispatch order.
pub fn registered_profiles() -> &'static [&'static LanguageProfile] {
    ALL_PROFILES
}

/// Find the profile responsible for a file path, by extension
/// (case-insensitive). `None` for unknown or missing extensions.
pub fn profile_for_path(path: &Path) -> Option<&'static LanguageProfile> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    registered_profiles()
        .iter()
        .copied()
        .find(|profile| profile.matches_extension(&ext))
}

/// Whether the file's extension is in the dispatch table. Unknown
/// extensions are silently skipped by the walker.
pub fn is_supported(path: &Path) -> bool {
    profile_for_path(path).is_some()
}

/// Build a parser configured for the given profile and file extension.
pub fn create_parser(profile: &LanguageProfile, ext: &str) -> Result<Parser> {
    let mut parser = Parser::new();
    let language = (profile.grammar)(ext);
    parser.set_language(&language).map_err(|e| {
        DebtdroneError::parse(
            profile.key,
            format!("failed to set parser language: {e}"),
        )
    })?;
    Ok(parser)
}

/// Lowercase extension of a path, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table_covers_the_twelve_families() {
        let cases = [
            ("main.go", "Go"),
            ("app.js", "JavaScript"),
            ("component.jsx", "JavaScript"),
            ("service.ts", "TypeScript"),
            ("view.tsx", "TypeScript"),
            ("script.py", "Python"),
            ("Main.java", "Java"),
            ("App.kt", "Kotlin"),
            ("build.kts", "Kotlin"),
            ("model.rb", "Ruby"),
            ("lib.rs", "Rust"),
            ("View.swift", "Swift"),
            ("index.php", "PHP"),
            ("Program.cs", "C#"),
            ("main.c", "C/C++"),
            ("engine.cpp", "C/C++"),
            ("engine.cc", "C/C++"),
            ("engine.cxx", "C/C++"),
            ("engine.c++", "C/C++"),
            ("engine.h", "C/C++"),
            ("engine.hpp", "C/C++"),
            ("engine.hxx", "C/C++"),
            ("engine.h++", "C/C++"),
        ];

        for (file, language) in cases {
            let profile = profile_for_path(Path::new(file))
                .unwrap_or_else(|| panic!("no profile for {file}"));
            assert_eq!(profile.name, language, "wrong profile for {file}");
        }
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert!(is_supported(Path::new("MAIN.GO")));
        assert!(is_supported(Path::new("App.KT")));
        assert!(is_supported(Path::new("view.TSX")));
    }

    #[test]
    fn unknown_extensions_are_unsupported() {
        assert!(!is_supported(Path::new("README.md")));
        assert!(!is_supported(Path::new("data.json")));
        assert!(!is_supported(Path::new("Makefile")));
        assert!(!is_supported(Path::new("noext")));
    }

    #[test]
    fn parsers_construct_for_every_profile() {
        for profile in registered_profiles() {
            for ext in profile.extensions {
                let parser = create_parser(profile, ext);
                assert!(
                    parser.is_ok(),
                    "parser for {} ({ext}) should be available",
                    profile.name
                );
            }
        }
    }

    #[test]
    fn extension_of_normalizes_case() {
        assert_eq!(extension_of(Path::new("a/b/Main.GO")), "go");
        assert_eq!(extension_of(Path::new("noext")), "");
    }
}
