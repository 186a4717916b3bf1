use std::str::FromStr;

use super::BackendError;

const URI_SCHEME: &str = "erc1319://";

/// A parsed package URI of the form
/// `erc1319://<registry-address>/<package-name>[@<version>]`.
#[derive(Debug, PartialEq, Clone)]
pub struct PackageUri {
    pub address: String,
    pub name: String,
    pub version: Option<String>,
}

impl std::fmt::Display for PackageUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}/{}", URI_SCHEME, self.address, self.name)?;
        if let Some(ref v) = self.version {
            write!(f, "@{}", v)?;
        }
        Ok(())
    }
}

impl FromStr for PackageUri {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BackendError::InvalidUri(s.to_string());

        let rest = s.strip_prefix(URI_SCHEME).ok_or_else(invalid)?;

        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(invalid());
        }
        let address = parts[0].to_string();

        // Split by @ to get optional version
        let (name, version) = if let Some(at_pos) = parts[1].rfind('@') {
            let (name, ver) = parts[1].split_at(at_pos);
            let ver = &ver[1..]; // Skip the @
            if name.is_empty() || ver.is_empty() {
                return Err(invalid());
            }
            (name.to_string(), Some(ver.to_string()))
        } else {
            (parts[1].to_string(), None)
        };

        Ok(PackageUri {
            address,
            name,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uri_without_version() {
        let uri = PackageUri::from_str("erc1319://0xAB/token").unwrap();
        assert_eq!(uri.address, "0xAB");
        assert_eq!(uri.name, "token");
        assert_eq!(uri.version, None);
    }

    #[test]
    fn test_parse_uri_with_version() {
        let uri = PackageUri::from_str("erc1319://0xAB/token@1.0.0").unwrap();
        assert_eq!(uri.address, "0xAB");
        assert_eq!(uri.name, "token");
        assert_eq!(uri.version, Some("1.0.0".to_string()));
    }

    #[test]
    fn test_parse_uri_wrong_scheme_fails() {
        let result = PackageUri::from_str("http://0xAB/token");
        assert!(matches!(result, Err(BackendError::InvalidUri(_))));
    }

    #[test]
    fn test_parse_uri_missing_name_fails() {
        let result = PackageUri::from_str("erc1319://0xAB");
        assert!(matches!(result, Err(BackendError::InvalidUri(_))));
    }

    #[test]
    fn test_parse_uri_empty_segments_fail() {
        assert!(PackageUri::from_str("erc1319:///token").is_err());
        assert!(PackageUri::from_str("erc1319://0xAB/").is_err());
    }

    #[test]
    fn test_parse_uri_extra_segments_fail() {
        let result = PackageUri::from_str("erc1319://0xAB/token/extra");
        assert!(matches!(result, Err(BackendError::InvalidUri(_))));
    }

    #[test]
    fn test_parse_uri_empty_version_fails() {
        let result = PackageUri::from_str("erc1319://0xAB/token@");
        assert!(matches!(result, Err(BackendError::InvalidUri(_))));
    }

    #[test]
    fn test_uri_display_round_trip() {
        let uri = PackageUri::from_str("erc1319://0xAB/token@2.1.0").unwrap();
        assert_eq!(uri.to_string(), "erc1319://0xAB/token@2.1.0");

        let bare = PackageUri::from_str("erc1319://0xAB/token").unwrap();
        assert_eq!(bare.to_string(), "erc1319://0xAB/token");
    }
}
