//! Remote manifest probing.
//!
//! A repository counts as an acquirable Wurst package if, and only if, a
//! `wurst.build` file exists at its root on the default branch. The
//! manifest body is fetched but not inspected beyond a best-effort
//! metadata parse; a future resolver is expected to read declared
//! sub-dependencies out of it.

use std::io::Read;

use colored::*;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::reference::RepositoryLocator;

/// Well-known manifest filename marking a repository as a Wurst package.
pub const MANIFEST_FILE: &str = "wurst.build";

const API_ROOT: &str = "https://api.github.com";

/// Capability seam for the pipeline; lets tests substitute a canned
/// verdict instead of talking to a code host.
pub trait ManifestProbe {
    fn probe(&self, locator: &RepositoryLocator) -> Result<()>;
}

/// Metadata the contents API reports for the manifest. Parsed on a
/// best-effort basis and currently discarded.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ManifestEntry {
    name: String,
    path: String,
    sha: String,
    size: u64,
}

/// Probes the GitHub contents API for the manifest on the default branch.
pub struct GithubProber {
    agent: ureq::Agent,
    api_root: String,
    manifest: String,
}

impl GithubProber {
    pub fn new(manifest: &str) -> Self {
        Self {
            agent: ureq::agent(),
            api_root: API_ROOT.to_string(),
            manifest: manifest.to_string(),
        }
    }

    fn contents_url(&self, locator: &RepositoryLocator) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_root,
            locator.owner(),
            locator.name(),
            self.manifest
        )
    }

    fn rejection(&self, locator: &RepositoryLocator, source: Option<ureq::Error>) -> Error {
        Error::NotAPackageRepository {
            reference: locator.to_string(),
            source,
        }
    }
}

impl ManifestProbe for GithubProber {
    fn probe(&self, locator: &RepositoryLocator) -> Result<()> {
        println!(
            "   {} Checking {} for {}...",
            "🔎".cyan(),
            locator.to_string().bold(),
            self.manifest
        );

        let response = self
            .agent
            .get(&self.contents_url(locator))
            .header(
                "User-Agent",
                concat!("wurstpm/", env!("CARGO_PKG_VERSION")),
            )
            .call()
            .map_err(|err| self.rejection(locator, Some(err)))?;

        if response.status() != 200 {
            return Err(self.rejection(locator, None));
        }

        // Drain the body so the connection is released cleanly even though
        // the payload is unused. The metadata parse is best-effort and its
        // result is intentionally discarded for now.
        let mut reader = response.into_body().into_reader();
        let mut body = String::new();
        if reader.read_to_string(&mut body).is_ok() {
            let _ = serde_json::from_str::<ManifestEntry>(&body);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_url_targets_repository_root() {
        let prober = GithubProber::new(MANIFEST_FILE);
        let locator = RepositoryLocator::parse("github.com/alice/mylib").unwrap();
        assert_eq!(
            prober.contents_url(&locator),
            "https://api.github.com/repos/alice/mylib/contents/wurst.build"
        );
    }

    #[test]
    fn manifest_filename_is_injectable() {
        let prober = GithubProber::new("pkg.yaml");
        let locator = RepositoryLocator::parse("github.com/alice/mylib").unwrap();
        assert!(prober.contents_url(&locator).ends_with("/contents/pkg.yaml"));
    }

    #[test]
    fn manifest_metadata_parses_from_contents_api_shape() {
        let body = r#"{
            "name": "wurst.build",
            "path": "wurst.build",
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
            "size": 142,
            "type": "file"
        }"#;
        let entry: ManifestEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.name, "wurst.build");
        assert_eq!(entry.size, 142);
    }
}
