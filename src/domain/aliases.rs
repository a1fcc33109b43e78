use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// alias -> canonical author name
pub type AuthorAliasMap = HashMap<String, String>;

/// Read a YAML file mapping each canonical name to its aliases:
///
/// ```yaml
/// alice: [al, asmith]
/// bob:
///   - bobby
/// ```
pub fn load(path: &Path) -> Result<AuthorAliasMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read alias file {}", path.display()))?;
    from_yaml(&text).with_context(|| format!("invalid alias file {}", path.display()))
}

pub fn from_yaml(text: &str) -> Result<AuthorAliasMap> {
    if text.trim().is_empty() {
        return Ok(AuthorAliasMap::new());
    }
    let by_name: BTreeMap<String, Vec<String>> = serde_yaml::from_str(text)?;
    Ok(invert(by_name))
}

fn invert(by_name: BTreeMap<String, Vec<String>>) -> AuthorAliasMap {
    let mut map = AuthorAliasMap::new();
    for (name, aliases) in by_name {
        for alias in aliases {
            map.insert(alias, name.clone());
        }
    }
    map
}
