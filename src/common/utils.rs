//! Small helpers that do not belong to a particular module.

use std::path::Path;

/// Render a path for display with the home directory shortened to `~`.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(relative) = path.strip_prefix(&home)
    {
        return format!("~/{}", relative.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_path_hides_home() {
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".config").join("suntable").join("suntable.toml");
            assert_eq!(private_path(&path), "~/.config/suntable/suntable.toml");
        }
    }

    #[test]
    fn test_private_path_keeps_other_paths() {
        let path = Path::new("/etc/suntable.toml");
        if dirs::home_dir().is_some_and(|home| path.starts_with(home)) {
            return;
        }
        assert_eq!(private_path(path), "/etc/suntable.toml");
    }
}
