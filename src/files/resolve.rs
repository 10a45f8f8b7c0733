use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// `..`, an absolute path or a drive prefix.
    Traversal,
    /// A component carrying a NUL byte.
    InvalidComponent,
}

/// Joins a request target onto `root`, one component at a time.
///
/// Nothing is looked up on disk; the result may not exist. An empty target
/// resolves to `root` itself.
pub fn resolve_path(root: &Path, target: &str) -> Result<PathBuf, ResolveError> {
    let mut resolved = root.to_path_buf();

    for component in Path::new(target).components() {
        match component {
            Component::Normal(name) => {
                if name.as_encoded_bytes().contains(&0) {
                    return Err(ResolveError::InvalidComponent);
                }
                resolved.push(name);
            }
            Component::CurDir => continue,
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ResolveError::Traversal);
            }
        }
    }

    Ok(resolved)
}
