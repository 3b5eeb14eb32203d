use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};
use vaultdoc_config::{Config, ConfigError};

use crate::convert::Converter;
use crate::error::ConvertError;
use crate::models::{DocumentNode, FrontMatter, VaultNote};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No vault_path configured")]
    NoVaultConfigured,
    #[error("Vault directory not found: {0}")]
    InvalidVaultDir(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },
}

/// Reads one note from the vault and imports it.
///
/// The file must be UTF-8; anything else is reported as a conversion error
/// rather than lossily decoded.
pub fn read_note(
    relative_path: &RelativePath,
    vault_root: &Path,
    converter: &Converter,
) -> Result<VaultNote, IoError> {
    let absolute_path = relative_path.to_path(vault_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }

    let bytes = fs::read(&absolute_path).map_err(IoError::Io)?;
    let raw = std::str::from_utf8(&bytes).map_err(|err| IoError::Convert {
        path: absolute_path.clone(),
        source: err.into(),
    })?;

    log::debug!("importing {}", absolute_path.display());
    Ok(VaultNote::new(
        relative_path.to_relative_path_buf(),
        raw,
        converter,
    ))
}

/// Writes a document tree back to the vault as a Markdown file.
pub fn write_note(
    relative_path: &RelativePath,
    vault_root: &Path,
    front_matter: &FrontMatter,
    nodes: &[DocumentNode],
    converter: &Converter,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(vault_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, converter.export_file(front_matter, nodes)).map_err(IoError::Io)
}

/// A vault directory and the converter its notes go through.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    converter: Converter,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>, converter: Converter) -> Self {
        Self {
            root: root.into(),
            converter,
        }
    }

    /// Opens the configured `vault_path` with the configured conversion options.
    pub fn from_config(config: &Config) -> Result<Self, IoError> {
        let root = config
            .vault_path
            .clone()
            .ok_or(IoError::NoVaultConfigured)?;
        if !root.is_dir() {
            return Err(IoError::InvalidVaultDir(root));
        }
        Ok(Self::new(root, Converter::from_config(config)))
    }

    /// Opens the vault named in `~/.config/vaultdoc/config.toml`.
    pub fn open_default() -> Result<Self, IoError> {
        let config = Config::load()?.ok_or(IoError::NoVaultConfigured)?;
        Self::from_config(&config)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn read_note(&self, relative_path: &RelativePath) -> Result<VaultNote, IoError> {
        read_note(relative_path, &self.root, &self.converter)
    }

    pub fn write_note(
        &self,
        relative_path: &RelativePath,
        front_matter: &FrontMatter,
        nodes: &[DocumentNode],
    ) -> Result<(), IoError> {
        write_note(relative_path, &self.root, front_matter, nodes, &self.converter)
    }
}
