//! Locating the `.kwm.toml` files that apply to a run.
//!
//! A run reads at most two files. The project file is the nearest
//! `.kwm.toml` at or above the working directory; files further up are not
//! read. The home file `~/.kwm.toml` fills in whatever the project file
//! leaves unset, unless the project file sets `root = true`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{ConfigError, parse::is_root_config};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".kwm.toml";

/// The configuration files that apply to a working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLocations {
    /// Nearest `.kwm.toml` at or above the working directory.
    pub project: Option<PathBuf>,
    /// `~/.kwm.toml`, when present and not shut out by the project file.
    pub home: Option<PathBuf>,
}

impl ConfigLocations {
    /// Finds the project and home files for `cwd`.
    pub fn discover(cwd: &Path) -> Self {
        Self::discover_with_home(cwd, home_config_path().ok().as_deref())
    }

    /// Finds the project file for `cwd` and pairs it with `home`.
    fn discover_with_home(cwd: &Path, home: Option<&Path>) -> Self {
        let project = cwd
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|path| path.is_file());
        let sealed = project.as_deref().is_some_and(is_root_config);

        let home = home
            .filter(|path| !sealed && path.is_file() && project.as_deref() != Some(*path))
            .map(Path::to_path_buf);

        Self { project, home }
    }

    /// Returns the files to load, highest precedence first.
    pub fn files(&self) -> Vec<PathBuf> {
        self.project.iter().chain(&self.home).cloned().collect()
    }
}

/// Returns the path of the home configuration file (`~/.kwm.toml`).
pub fn home_config_path() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Writes a config file under `dir` and returns its path.
    fn write_config(dir: &Path, rel_dir: &str, body: &str) -> PathBuf {
        let dir = dir.join(rel_dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn nearest_project_file_shadows_outer_ones() {
        let site = TempDir::new().unwrap();
        write_config(site.path(), "", "[weights]\ntitle = 9\n");
        let blog = write_config(site.path(), "blog", "[keywords]\nlimit = 5\n");
        let cwd = site.path().join("blog/posts");
        fs::create_dir_all(&cwd).unwrap();

        let found = ConfigLocations::discover_with_home(&cwd, None);

        assert_eq!(found.project, Some(blog.clone()));
        assert_eq!(found.files(), vec![blog]);
    }

    #[test]
    fn home_file_fills_in_after_project() {
        let site = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let project = write_config(site.path(), "", "[keywords]\nstopwords = \"cookie\"\n");
        let home_file = write_config(home.path(), "", "[fetch]\ntimeout_secs = 30\n");

        let found = ConfigLocations::discover_with_home(site.path(), Some(&home_file));

        assert_eq!(found.files(), vec![project, home_file]);
    }

    #[test]
    fn root_project_shuts_out_home_file() {
        let site = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let project = write_config(site.path(), "", "root = true\n[weights]\ntitle = 2\n");
        let home_file = write_config(home.path(), "", "[weights]\ntitle = 7\n");

        let found = ConfigLocations::discover_with_home(site.path(), Some(&home_file));

        assert_eq!(found.project, Some(project));
        assert!(found.home.is_none());
    }

    #[test]
    fn root_false_keeps_home_file() {
        let site = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_config(site.path(), "", "root = false\n");
        let home_file = write_config(home.path(), "", "[keywords]\nlimit = 3\n");

        let found = ConfigLocations::discover_with_home(site.path(), Some(&home_file));

        assert_eq!(found.home, Some(home_file));
    }

    #[test]
    fn home_file_alone_without_project() {
        let site = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let home_file = write_config(home.path(), "", "[keywords]\ntagger = \"none\"\n");

        let found = ConfigLocations::discover_with_home(site.path(), Some(&home_file));

        assert!(found.project.is_none());
        assert_eq!(found.files(), vec![home_file]);
    }

    #[test]
    fn home_file_is_not_loaded_twice() {
        let home = TempDir::new().unwrap();
        let home_file = write_config(home.path(), "", "[keywords]\nlimit = 3\n");

        let found = ConfigLocations::discover_with_home(home.path(), Some(&home_file));

        assert_eq!(found.files(), vec![home_file]);
        assert!(found.home.is_none());
    }

    #[test]
    fn missing_home_file_is_skipped() {
        let site = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let absent = home.path().join(CONFIG_FILENAME);

        let found = ConfigLocations::discover_with_home(site.path(), Some(&absent));

        assert_eq!(found, ConfigLocations::default());
        assert!(found.files().is_empty());
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let site = TempDir::new().unwrap();
        let outer = write_config(site.path(), "", "");
        fs::create_dir_all(site.path().join("blog").join(CONFIG_FILENAME)).unwrap();

        let found = ConfigLocations::discover_with_home(&site.path().join("blog"), None);

        assert_eq!(found.project, Some(outer));
    }

    #[test]
    fn unparseable_project_does_not_shut_out_home() {
        let site = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_config(site.path(), "", "root = true\n[weights\n");
        let home_file = write_config(home.path(), "", "");

        let found = ConfigLocations::discover_with_home(site.path(), Some(&home_file));

        // Loading reports the parse error; discovery only lists the files.
        assert_eq!(found.home, Some(home_file));
    }

    #[test]
    fn home_config_path_names_the_config_file() {
        let path = home_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
    }
}
