use std::path::{Component, Path, PathBuf};

pub(crate) fn strip_relative_prefix(key: &str) -> &str {
    key.strip_prefix("./").unwrap_or(key)
}

/// Join a resolver prefix and an icon name into a `/`-separated specifier.
/// The name itself is passed through untouched.
pub(crate) fn asset_specifier(base: &str, name: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return name.to_string();
    }
    format!("{base}/{name}")
}

/// Context key for `path` below `root`, in `./a/b.png` form.
///
/// `None` for the root itself, paths outside it, and names that are not
/// valid UTF-8.
pub(crate) fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;

    let mut key = String::from(".");
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                key.push('/');
                key.push_str(part.to_str()?);
            }
            _ => return None,
        }
    }

    (key.len() > 1).then_some(key)
}

/// Join `specifier` under `root`, refusing anything that could leave it.
///
/// Segments are taken verbatim; one that is not a plain file or directory
/// name rejects the whole specifier.
pub(crate) fn safe_join(root: &Path, specifier: &str) -> Option<PathBuf> {
    if specifier.starts_with('/') || Path::new(specifier).is_absolute() {
        return None;
    }

    let mut path = PathBuf::from(root);
    let mut joined = false;
    for segment in specifier.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }

        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part == segment => path.push(part),
            _ => return None,
        }
        joined = true;
    }

    joined.then_some(path)
}
