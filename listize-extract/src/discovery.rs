//! Package directory scan.
//!
//! Resolves a directory the way `go build` would see it for a target: the
//! non-test `.go` files directly inside it whose build constraints hold,
//! sorted by name, all sharing one package clause.

use std::path::{Path, PathBuf};

use listize_core::GO_EXTENSION;

use crate::{BuildContext, DiscoveryError, SourceUnit};

/// A Go package directory and its source units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name from the package clauses.
    pub name: String,
    /// The scanned directory.
    pub dir: PathBuf,
    /// Source unit paths (`dir` joined with the file name), sorted by name.
    pub files: Vec<PathBuf>,
}

/// Resolve `dir` into a package name and its source units for the host.
pub fn discover_package(dir: impl AsRef<Path>) -> Result<Package, DiscoveryError> {
    discover_package_for(dir, &BuildContext::host())
}

/// Resolve `dir` for the target described by `ctx`.
///
/// Files whose name suffix or header constraint excludes the target are
/// left out, so per-platform variants of one type never meet.
pub fn discover_package_for(
    dir: impl AsRef<Path>,
    ctx: &BuildContext,
) -> Result<Package, DiscoveryError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(DiscoveryError::NotFound {
            dir: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            dir: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| DiscoveryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_file && is_candidate(&name) && ctx.matches_file_name(&name) {
            names.push(name);
        }
    }
    names.sort();

    let mut package: Option<(String, PathBuf)> = None;
    let mut files = Vec::with_capacity(names.len());

    for name in names {
        let path = dir.join(&name);
        let text = std::fs::read_to_string(&path).map_err(|source| DiscoveryError::Io {
            path: path.clone(),
            source,
        })?;
        let satisfied = ctx
            .matches_header(&text)
            .map_err(|source| DiscoveryError::Constraint {
                path: path.clone(),
                source,
            })?;
        if !satisfied {
            continue;
        }

        let unit = SourceUnit::parse_lenient(text).map_err(DiscoveryError::Parser)?;
        let pkg_name = unit
            .package_name()
            .ok_or_else(|| DiscoveryError::MissingPackageClause { path: path.clone() })?
            .to_string();

        match &package {
            None => package = Some((pkg_name, path.clone())),
            Some((first, first_file)) if *first != pkg_name => {
                return Err(DiscoveryError::MultiplePackages {
                    dir: dir.to_path_buf(),
                    first: first.clone(),
                    first_file: first_file.clone(),
                    second: pkg_name,
                    second_file: path,
                });
            }
            Some(_) => {}
        }
        files.push(path);
    }

    match package {
        Some((name, _)) => Ok(Package {
            name,
            dir: dir.to_path_buf(),
            files,
        }),
        None => Err(DiscoveryError::NoGoFiles {
            dir: dir.to_path_buf(),
        }),
    }
}

fn is_candidate(name: &str) -> bool {
    name.ends_with(GO_EXTENSION)
        && !name.ends_with("_test.go")
        && !name.starts_with('_')
        && !name.starts_with('.')
}

/// Drop every path ending with `suffix`, keeping the rest in order.
///
/// An empty suffix filters nothing.
pub fn exclude<P: AsRef<Path>>(paths: Vec<P>, suffix: &str) -> Vec<P> {
    if suffix.is_empty() {
        return paths;
    }
    paths
        .into_iter()
        .filter(|p| !p.as_ref().to_string_lossy().ends_with(suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exclude_empty_input() {
        assert!(exclude(Vec::<String>::new(), "").is_empty());
        assert!(exclude(Vec::<String>::new(), "_gen.go").is_empty());
    }

    #[test]
    fn test_exclude_suffix() {
        let paths = strings(&["aaa.go", "bbb/ccc.go", "ddd_gen.go", "eee/fff_gen.go"]);
        assert_eq!(exclude(paths, "_gen.go"), strings(&["aaa.go", "bbb/ccc.go"]));
    }

    #[test]
    fn test_exclude_empty_suffix_is_identity() {
        let paths = strings(&["aaa.go", "bbb/ccc.go", "ddd_gen.go", "eee/fff_gen.go"]);
        assert_eq!(exclude(paths.clone(), ""), paths);
    }

    #[test]
    fn test_exclude_keeps_order_of_survivors() {
        let paths = strings(&["z_gen.go", "b.go", "a_gen.go", "a.go", "gen.go"]);
        assert_eq!(exclude(paths, "_gen.go"), strings(&["b.go", "a.go", "gen.go"]));
    }

    #[test]
    fn test_exclude_pathbufs() {
        let paths = vec![PathBuf::from("x/a.go"), PathBuf::from("x/a_gen.go")];
        assert_eq!(exclude(paths, "_gen.go"), vec![PathBuf::from("x/a.go")]);
    }

    #[test]
    fn test_is_candidate() {
        assert!(is_candidate("user.go"));
        assert!(is_candidate("user_gen.go"));
        assert!(!is_candidate("user_test.go"));
        assert!(!is_candidate("_scratch.go"));
        assert!(!is_candidate(".hidden.go"));
        assert!(!is_candidate("README.md"));
    }
}
