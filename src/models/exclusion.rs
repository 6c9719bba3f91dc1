use std::fmt;
use std::path::{Component, Path};

/// A path-component name, or a relative path, that removes matching source
/// entries from redirect generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    components: Vec<String>,
}

impl ExclusionRule {
    /// Returns `None` for rules that normalise to nothing (`""`, `"."`, `"/"`).
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().replace('\\', "/");
        let components: Vec<String> = normalized
            .split('/')
            .filter(|part| !part.is_empty() && *part != ".")
            .map(str::to_string)
            .collect();

        if components.is_empty() {
            None
        } else {
            Some(Self { components })
        }
    }

    /// A single name matches any component of the path; a multi-component
    /// rule must be a prefix of it.
    pub fn matches(&self, path_components: &[String]) -> bool {
        match self.components.as_slice() {
            [name] => path_components.iter().any(|component| component == name),
            rule => path_components.starts_with(rule),
        }
    }
}

impl fmt::Display for ExclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components.join("/"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    rules: Vec<ExclusionRule>,
}

impl ExclusionSet {
    pub fn new<I, S>(raw_rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules: Vec<ExclusionRule> = Vec::new();
        for rule in raw_rules
            .into_iter()
            .filter_map(|raw| ExclusionRule::parse(raw.as_ref()))
        {
            if !rules.contains(&rule) {
                rules.push(rule);
            }
        }
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first rule excluding `relative_path`, if any.
    pub fn find_match(&self, relative_path: &Path) -> Option<&ExclusionRule> {
        let components = path_components(relative_path);
        self.rules.iter().find(|rule| rule.matches(&components))
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<String> = self.rules.iter().map(ToString::to_string).collect();
        f.write_str(&names.join(","))
    }
}

fn path_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
