//! Shared helpers for tree building: ordering, ignore patterns, path cleanup

use std::cmp::Ordering;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;

/// Sort key for entry ordering: the case-folded path, then the raw path bytes.
pub fn sort_key(path: &Path) -> (String, OsString) {
    (
        path.to_string_lossy().to_lowercase(),
        path.as_os_str().to_os_string(),
    )
}

/// Case-insensitive path ordering, ties broken by the raw path bytes.
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Check if an entry name should be skipped based on ignore patterns.
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Lexically normalize a path: drop `.` components, fold `name/..` pairs and
/// trailing separators. The filesystem is not consulted, so symlinked parents
/// are not resolved. An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_paths_ignores_case() {
        assert_eq!(
            compare_paths(Path::new("dir/Bin"), Path::new("dir/data.txt")),
            Ordering::Less
        );
        assert_eq!(
            compare_paths(Path::new("dir/apple"), Path::new("dir/Banana")),
            Ordering::Less
        );
        assert_eq!(
            compare_paths(Path::new("dir/Zeta"), Path::new("dir/alpha")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_paths_tie_uses_bytes() {
        // Uppercase sorts before lowercase in byte order
        assert_eq!(
            compare_paths(Path::new("README"), Path::new("readme")),
            Ordering::Less
        );
        assert_eq!(
            compare_paths(Path::new("same"), Path::new("same")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_key_orders_like_compare_paths() {
        let mut paths = vec![
            PathBuf::from("d/readme"),
            PathBuf::from("d/Beta"),
            PathBuf::from("d/README"),
            PathBuf::from("d/alpha"),
        ];
        paths.sort_by_cached_key(|p| sort_key(p));
        assert_eq!(paths, ["d/alpha", "d/Beta", "d/README", "d/readme"].map(PathBuf::from));
        assert!(paths.windows(2).all(|w| compare_paths(&w[0], &w[1]) == Ordering::Less));
    }

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.rs", "main.rs"));
        assert!(!glob_match("*.rs", "main.py"));
        assert!(glob_match("test?.rs", "test1.rs"));
        assert!(!glob_match("test?.rs", "test12.rs"));
        assert!(glob_match("[abc].txt", "b.txt"));
        assert!(!glob_match("[a-z].txt", "X.txt"));
    }

    #[test]
    fn test_should_ignore_name() {
        let patterns = vec!["target".to_string(), "*.log".to_string()];
        assert!(should_ignore_name("target", &patterns));
        assert!(should_ignore_name("debug.log", &patterns));
        assert!(!should_ignore_name("src", &patterns));
        assert!(!should_ignore_name("anything", &[]));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("tmp2/")), PathBuf::from("tmp2"));
        assert_eq!(normalize_path(Path::new("./tmp2/./bin")), PathBuf::from("tmp2/bin"));
        assert_eq!(normalize_path(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new(".")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
    }
}
