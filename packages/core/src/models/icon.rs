//! Icon key lookup table
//!
//! Nodes reference their icon by a string key. The data layer resolves the
//! key against this fixed table and hands the rendering layer an opaque
//! display identifier; the rendering layer owns the actual icon assets.
//! Unknown or absent keys resolve to no icon, never an error and never a
//! remote fetch.

use serde::Serialize;

/// Opaque display identifier for a node icon.
///
/// Serializes as the exact key the rendering layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconKey {
    Globe,
    Code,
    Rocket,
    BookOpen,
    Layers,
    Server,
    Database,
    GitBranch,
    Cpu,
}

impl IconKey {
    /// Resolve a stored icon key against the fixed table.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepath_core::models::IconKey;
    ///
    /// assert_eq!(IconKey::resolve("Globe"), Some(IconKey::Globe));
    /// assert_eq!(IconKey::resolve("NotAnIcon"), None);
    /// ```
    pub fn resolve(key: &str) -> Option<Self> {
        match key {
            "Globe" => Some(Self::Globe),
            "Code" => Some(Self::Code),
            "Rocket" => Some(Self::Rocket),
            "BookOpen" => Some(Self::BookOpen),
            "Layers" => Some(Self::Layers),
            "Server" => Some(Self::Server),
            "Database" => Some(Self::Database),
            "GitBranch" => Some(Self::GitBranch),
            "Cpu" => Some(Self::Cpu),
            _ => None,
        }
    }

    /// The key as handed to the rendering layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Globe => "Globe",
            Self::Code => "Code",
            Self::Rocket => "Rocket",
            Self::BookOpen => "BookOpen",
            Self::Layers => "Layers",
            Self::Server => "Server",
            Self::Database => "Database",
            Self::GitBranch => "GitBranch",
            Self::Cpu => "Cpu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip() {
        for key in [
            "Globe", "Code", "Rocket", "BookOpen", "Layers", "Server", "Database", "GitBranch",
            "Cpu",
        ] {
            let resolved = IconKey::resolve(key).expect("key should resolve");
            assert_eq!(resolved.as_str(), key);
        }
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        assert_eq!(IconKey::resolve("Sparkles"), None);
        assert_eq!(IconKey::resolve(""), None);
    }

    #[test]
    fn serializes_as_bare_key() {
        let json = serde_json::to_string(&IconKey::GitBranch).unwrap();
        assert_eq!(json, "\"GitBranch\"");
    }
}
