use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use bridgectl_common::files::{read_json_file, read_yaml_file, save_json_file, save_yaml_file};
use serde::{de::DeserializeOwned, Serialize};
use xshell::Shell;

/// Marker for config records owned by this harness.
pub trait FileConfigTrait {}

pub trait FileConfigWithDefaultName {
    const FILE_NAME: &'static str;

    fn get_path_with_base_path(base_path: impl AsRef<Path>) -> PathBuf {
        base_path.as_ref().join(Self::FILE_NAME)
    }
}

/// Reads a config file from a given path, correctly parsing file extension.
/// Supported file extensions are: `yaml`, `yml`, `json`.
pub trait ReadConfig: Sized {
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self>;
}

impl<T> ReadConfig for T
where
    T: DeserializeOwned + Clone + FileConfigTrait,
{
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let error_context = || format!("Failed to parse config file {:?}.", path.as_ref());

        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => read_yaml_file(shell, &path).with_context(error_context),
            Some("json") => read_json_file(shell, &path).with_context(error_context),
            _ => bail!(format!(
                "Unsupported file extension for config file {:?}.",
                path.as_ref()
            )),
        }
    }
}

/// Reads a config file from a base path, correctly parsing file extension.
pub trait ReadConfigWithBasePath: ReadConfig + FileConfigWithDefaultName + Clone {
    fn read_with_base_path(shell: &Shell, base_path: impl AsRef<Path>) -> anyhow::Result<Self>;
}

impl<T> ReadConfigWithBasePath for T
where
    T: FileConfigWithDefaultName + Clone + ReadConfig,
{
    fn read_with_base_path(shell: &Shell, base_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        <Self as ReadConfig>::read(shell, base_path.as_ref().join(Self::FILE_NAME))
    }
}

/// Saves a config file to a given path, correctly parsing file extension.
pub trait SaveConfig {
    fn save(&self, shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<()>;
}

impl<T: Serialize + FileConfigTrait> SaveConfig for T {
    fn save(&self, shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<()> {
        save_with_comment(shell, path, self, "")
    }
}

/// Saves a config file from a base path, correctly parsing file extension.
pub trait SaveConfigWithBasePath: SaveConfig + FileConfigWithDefaultName {
    fn save_with_base_path(
        &self,
        shell: &Shell,
        base_path: impl AsRef<Path>,
    ) -> anyhow::Result<()> {
        <Self as SaveConfig>::save(self, shell, base_path.as_ref().join(Self::FILE_NAME))
    }
}

impl<T> SaveConfigWithBasePath for T where T: FileConfigWithDefaultName + SaveConfig {}

fn save_with_comment(
    shell: &Shell,
    path: impl AsRef<Path>,
    data: impl Serialize,
    comment: impl ToString,
) -> anyhow::Result<()> {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => save_yaml_file(shell, path, data, comment)?,
        Some("json") => save_json_file(shell, path, data)?,
        _ => bail!("Unsupported file extension for config file."),
    }
    Ok(())
}
