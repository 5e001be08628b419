use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Go toolchain version as written in a `go.mod` `go` directive.
///
/// Accepts `MAJOR.MINOR` and `MAJOR.MINOR.PATCH`; the patch component is
/// only rendered when it was given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct GoVersion {
    major: u32,
    minor: u32,
    patch: Option<u32>,
}

impl TryFrom<String> for GoVersion {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for GoVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl GoVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    pub fn with_patch(mut self, patch: u32) -> Self {
        self.patch = Some(patch);
        self
    }
}

impl Default for GoVersion {
    fn default() -> Self {
        Self::new(1, 22)
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        Ok(())
    }
}

impl FromStr for GoVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(format!(
                "invalid go version '{}', expected 'X.Y' or 'X.Y.Z'",
                s
            ));
        }
        Ok(Self {
            major: parts[0].parse().map_err(|_| "invalid major")?,
            minor: parts[1].parse().map_err(|_| "invalid minor")?,
            patch: match parts.get(2) {
                Some(p) => Some(p.parse().map_err(|_| "invalid patch")?),
                None => None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GoVersion::new(1, 22).to_string(), "1.22");
        assert_eq!(GoVersion::new(1, 21).with_patch(3).to_string(), "1.21.3");
        assert_eq!(GoVersion::default().to_string(), "1.22");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.22".parse::<GoVersion>().unwrap(), GoVersion::new(1, 22));
        assert_eq!(
            "1.21.3".parse::<GoVersion>().unwrap(),
            GoVersion::new(1, 21).with_patch(3)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("1".parse::<GoVersion>().is_err());
        assert!("1.2.3.4".parse::<GoVersion>().is_err());
        assert!("a.b".parse::<GoVersion>().is_err());
        assert!("1.22.x".parse::<GoVersion>().is_err());
        assert!("".parse::<GoVersion>().is_err());
    }

    #[test]
    fn test_serialize() {
        #[derive(Serialize)]
        struct Module {
            go: GoVersion,
        }
        let module = Module {
            go: GoVersion::new(1, 22),
        };
        let toml = toml::to_string(&module).unwrap();
        assert_eq!(toml.trim(), r#"go = "1.22""#);
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Module {
            go: GoVersion,
        }
        let module: Module = toml::from_str(r#"go = "1.21.3""#).unwrap();
        assert_eq!(module.go, GoVersion::new(1, 21).with_patch(3));

        assert!(toml::from_str::<Module>(r#"go = "one""#).is_err());
    }
}
