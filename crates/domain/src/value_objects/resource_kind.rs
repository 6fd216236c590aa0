//! The three resources a chain retrieves

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A fetchable resource, in dependency order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// The user profile
    Profile,
    /// Posts owned by a profile
    Posts,
    /// Comments on a post
    Comments,
}

impl ResourceKind {
    /// All resources in dependency order
    pub const ALL: [Self; 3] = [Self::Profile, Self::Posts, Self::Comments];

    /// Short machine-readable key
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Posts => "posts",
            Self::Comments => "comments",
        }
    }

    /// Human-readable name used in failure messages
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Profile => "user profile",
            Self::Posts => "posts",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profile" | "user" | "user_profile" => Ok(Self::Profile),
            "posts" | "post" => Ok(Self::Posts),
            "comments" | "comment" => Ok(Self::Comments),
            _ => Err(format!(
                "Invalid resource: {s}. Use 'profile', 'posts' or 'comments'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_human_names() {
        assert_eq!(ResourceKind::Profile.to_string(), "user profile");
        assert_eq!(ResourceKind::Posts.to_string(), "posts");
        assert_eq!(ResourceKind::Comments.to_string(), "comments");
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("Profile".parse::<ResourceKind>(), Ok(ResourceKind::Profile));
        assert_eq!("post".parse::<ResourceKind>(), Ok(ResourceKind::Posts));
        assert_eq!(" comments ".parse::<ResourceKind>(), Ok(ResourceKind::Comments));
        assert!("likes".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn all_is_dependency_ordered() {
        assert!(ResourceKind::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ResourceKind::Comments).unwrap();
        assert_eq!(json, "\"comments\"");
    }
}
