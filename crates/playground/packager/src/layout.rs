use serde::{Deserialize, Serialize};

/// File names of the four archive entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageLayout {
    pub module: String,
    pub source: String,
    pub runner: String,
    pub readme: String,
}

impl Default for PackageLayout {
    fn default() -> Self {
        Self {
            module: "module.wasm".into(),
            source: "source.wat".into(),
            runner: "index.html".into(),
            readme: "README.md".into(),
        }
    }
}

impl PackageLayout {
    /// Entry names in archive order.
    pub fn names(&self) -> [&str; 4] {
        [&self.module, &self.source, &self.runner, &self.readme]
    }

    pub(crate) fn first_duplicate(&self) -> Option<&str> {
        let names = self.names();
        names
            .iter()
            .enumerate()
            .find(|(i, name)| names[..*i].contains(*name))
            .map(|(_, name)| *name)
    }
}
