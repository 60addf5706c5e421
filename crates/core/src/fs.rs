use relative_path::RelativePathBuf;

/// A file under the blog root, with both its absolute and root-relative forms.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePath {
    pub abs_path: std::path::PathBuf,
    pub rel_path: RelativePathBuf,
}

impl SourcePath {
    pub fn from_root(root: &std::path::Path, path: &std::path::Path) -> Option<Self> {
        let abs_path = path.to_owned();
        let rel_path = path.strip_prefix(root).ok()?;
        let rel_path = RelativePathBuf::from_path(rel_path).ok()?;
        Some(Self { abs_path, rel_path })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relative_to_root() {
        let path = SourcePath::from_root(
            std::path::Path::new("/srv/blog"),
            std::path::Path::new("/srv/blog/2024/01/02/hello.rst"),
        )
        .unwrap();
        assert_eq!(path.rel_path.as_str(), "2024/01/02/hello.rst");
        assert_eq!(path.abs_path, std::path::Path::new("/srv/blog/2024/01/02/hello.rst"));
    }

    #[test]
    fn outside_root() {
        let path = SourcePath::from_root(
            std::path::Path::new("/srv/blog"),
            std::path::Path::new("/srv/other/hello.rst"),
        );
        assert_eq!(path, None);
    }
}
