use std::path::{Path, PathBuf};

use crate::domain::color::Color;
use crate::domain::error::DomainError;
use crate::domain::seed::SeedStrategy;

pub const DEFAULT_INPUT_PATH: &str =
    "/home/dave-r/Documents/Antigravity Files/Realtor Homepage/public/phone-dialer.png";
pub const DEFAULT_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct RemovalConfig {
    pub input_path: PathBuf,
    /// `None` で入力ファイルを上書きする
    pub output_path: Option<PathBuf>,
    pub key_color: Color,
    pub replacement: Color,
    /// Maximum summed channel distance from a seed's color that still counts as background.
    pub threshold: u32,
    pub seeds: SeedStrategy,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: None,
            key_color: Color::KEY_MAGENTA,
            replacement: Color::TRANSPARENT_WHITE,
            threshold: DEFAULT_THRESHOLD,
            seeds: SeedStrategy::Corners,
        }
    }
}

impl RemovalConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.key_color == self.replacement {
            return Err(DomainError::InvalidInput(format!(
                "key color {:?} must differ from its replacement",
                self.key_color
            )));
        }
        Ok(())
    }

    pub fn target_path(&self) -> &Path {
        self.output_path.as_deref().unwrap_or(&self.input_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_hardcoded_script() {
        let config = RemovalConfig::default();
        assert_eq!(config.input_path, Path::new(DEFAULT_INPUT_PATH));
        assert_eq!(config.key_color, Color::new(255, 0, 255, 255));
        assert_eq!(config.replacement, Color::new(255, 255, 255, 0));
        assert_eq!(config.threshold, 60);
        assert_eq!(config.seeds, SeedStrategy::Corners);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_path_defaults_to_input() {
        let mut config = RemovalConfig::default();
        assert_eq!(config.target_path(), Path::new(DEFAULT_INPUT_PATH));

        config.output_path = Some(PathBuf::from("/tmp/out.png"));
        assert_eq!(config.target_path(), Path::new("/tmp/out.png"));
    }

    #[test]
    fn test_validate_rejects_identical_key_and_replacement() {
        let config = RemovalConfig {
            replacement: Color::KEY_MAGENTA,
            ..RemovalConfig::default()
        };
        assert!(matches!(config.validate(), Err(DomainError::InvalidInput(_))));
    }
}
