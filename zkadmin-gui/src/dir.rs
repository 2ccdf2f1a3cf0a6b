use std::path::{Path, PathBuf};

use crate::config::DEFAULT_FILE_NAME;

#[derive(Clone, Debug, PartialEq)]
pub struct AdminDirectory(PathBuf);

impl AdminDirectory {
    pub fn new(p: PathBuf) -> Self {
        AdminDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(AdminDirectory::new)
    }
}

impl AdminDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_path(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
}

// Get the absolute path to the zkadmin configuration folder.
///
/// This a "ZkAdmin" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.zkadmin`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".zkadmin");

        #[cfg(not(target_os = "linux"))]
        path.push("ZkAdmin");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder
            .mode(0o700)
            .recursive(true)
            .create(datadir_path)
            .map_err(|e| e.into())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path).map_err(|e| e.into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directory() {
        let root = std::env::temp_dir().join(format!("zkadmin-dir-{}", std::process::id()));
        let dir = AdminDirectory::new(root.join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        assert_eq!(dir.config_path(), root.join("a").join("b").join("gui.toml"));
        std::fs::remove_dir_all(root).unwrap();
    }
}
