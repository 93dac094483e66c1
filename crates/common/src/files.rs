use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use xshell::Shell;

pub fn read_json_file<T: DeserializeOwned>(
    shell: &Shell,
    file_path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let content = shell.read_file(file_path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_json_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    data: impl Serialize,
) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(&data)?;
    shell.write_file(file_path, content)?;
    Ok(())
}

pub fn read_yaml_file<T: DeserializeOwned>(
    shell: &Shell,
    file_path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let content = shell.read_file(file_path)?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn save_yaml_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    data: impl Serialize,
    comment: impl ToString,
) -> anyhow::Result<()> {
    let data = serde_yaml::to_string(&data)?;
    let mut content = comment.to_string();
    content.push_str(&data);
    shell.write_file(file_path, content)?;
    Ok(())
}
