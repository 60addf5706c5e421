use tinkr_config::SiteConfig;

use crate::Result;
use crate::SourcePath;
use crate::Status;

/// Entries the renderer never treats as sources, whatever `exclude_patterns` says.
pub const ALWAYS_EXCLUDED: &[&str] = &[".*", "/blog/", "/_tinkr.yml"];

/// The files under a blog root that take part in a build.
#[derive(Debug, Clone)]
pub struct Source {
    root: std::path::PathBuf,
    ignore: ignore::gitignore::Gitignore,
}

impl Source {
    pub fn new<'i>(
        root: &std::path::Path,
        ignores: impl IntoIterator<Item = &'i str>,
    ) -> Result<Self> {
        let mut ignore = ignore::gitignore::GitignoreBuilder::new(root);
        for line in ignores.into_iter() {
            ignore.add_line(None, line).map_err(|e| {
                Status::new("Invalid ignore entry")
                    .with_source(e)
                    .context_with(|c| c.insert("Pattern", line.to_owned()))
            })?;
        }
        let ignore = ignore
            .build()
            .map_err(|e| Status::new("Invalid ignore entry").with_source(e))?;

        let source = Self {
            root: root.to_owned(),
            ignore,
        };
        Ok(source)
    }

    /// Sources of the blog described by `config`, honouring its `exclude_patterns`.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let ignores = ALWAYS_EXCLUDED
            .iter()
            .copied()
            .chain(config.exclude_patterns.iter().map(|p| p.as_str()));
        Self::new(&config.root, ignores)
    }

    pub fn includes_file(&self, file: &std::path::Path) -> bool {
        let is_dir = false;
        self.includes_path(file, is_dir)
    }

    pub fn includes_dir(&self, dir: &std::path::Path) -> bool {
        let is_dir = true;
        self.includes_path(dir, is_dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = SourcePath> + '_ {
        walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.includes_entry(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(move |e| SourcePath::from_root(&self.root, e.path()))
    }

    fn includes_path(&self, path: &std::path::Path, is_dir: bool) -> bool {
        if path == self.root {
            return true;
        }

        let parent = path.parent();
        if let Some(parent) = parent {
            if parent.starts_with(&self.root) && !self.includes_path(parent, true) {
                return false;
            }
        }

        self.includes_path_leaf(path, is_dir)
    }

    fn includes_path_leaf(&self, path: &std::path::Path, is_dir: bool) -> bool {
        match self.ignore.matched(path, is_dir) {
            ignore::Match::None => true,
            ignore::Match::Ignore(glob) => {
                log::trace!("{:?}: excluded by {:?}", path, glob.original());
                false
            }
            ignore::Match::Whitelist(glob) => {
                log::trace!("{:?}: allowed by {:?}", path, glob.original());
                true
            }
        }
    }

    fn includes_entry(&self, entry: &walkdir::DirEntry) -> bool {
        let file = entry.path();

        // Parents were already checked on the way down.
        let is_dir = entry.file_type().is_dir();
        self.includes_path_leaf(file, is_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_includes_dir {
        ($root:expr, $ignores:expr, $test:expr, $included:expr) => {
            let root = $root;
            let ignores = $ignores.iter().copied();
            let files = Source::new(std::path::Path::new(root), ignores).unwrap();
            assert_eq!(files.includes_dir(std::path::Path::new($test)), $included);
        };
    }
    macro_rules! assert_includes_file {
        ($root:expr, $ignores:expr, $test:expr, $included:expr) => {
            let root = $root;
            let ignores = $ignores.iter().copied();
            let files = Source::new(std::path::Path::new(root), ignores).unwrap();
            assert_eq!(files.includes_file(std::path::Path::new($test)), $included);
        };
    }

    #[test]
    fn files_includes_root_dir() {
        assert_includes_dir!("/srv/blog", &[], "/srv/blog", true);

        assert_includes_dir!("./", &[], "./", true);
    }

    #[test]
    fn files_includes_child_dir() {
        assert_includes_dir!("/srv/blog", &[], "/srv/blog/pages", true);
    }

    #[test]
    fn files_ignore_hidden() {
        assert_includes_file!("/srv/blog", &[".*"], "/srv/blog/.master.rst.swp", false);
    }

    #[test]
    fn files_not_ignored_by_parent() {
        assert_includes_file!("/tmp/.foo/blog", &[".*"], "/tmp/.foo/blog/master.rst", true);
    }

    #[test]
    fn drafts_excluded() {
        assert_includes_file!("/srv/blog", &["drafts/*"], "/srv/blog/drafts/idea.rst", false);
        assert_includes_file!("/srv/blog", &["drafts/*"], "/srv/blog/pages/about.rst", true);
    }

    #[test]
    fn excluded_dir_hides_children() {
        assert_includes_file!("/srv/blog", &["/blog/"], "/srv/blog/blog/html/index.html", false);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let result = Source::new(std::path::Path::new("/srv/blog"), ["a[b"]);
        assert!(result.is_err());
    }

    #[test]
    fn iter_honours_exclude_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for file in [
            "master.rst",
            "pages/about.rst",
            "drafts/idea.rst",
            "_templates/page.html",
            "blog/html/index.html",
            "_tinkr.yml",
        ] {
            let path = root.join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "").unwrap();
        }

        let config = SiteConfig::default().with_root(root);
        let source = Source::from_config(&config).unwrap();
        let files: Vec<String> = source.iter().map(|p| p.rel_path.into_string()).collect();
        assert_eq!(files, ["master.rst", "pages/about.rst"]);
    }
}
