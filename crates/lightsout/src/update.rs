//! Software-update descriptor for the host's update checker.

use serde::Serialize;

const GITHUB_USER: &str = "Peaches491";
const GITHUB_REPO: &str = "OctoPrint-LightsOut";

/// Static update-check record returned to the host on demand.
///
/// Field names follow the host's camelCase convention on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDescriptor {
    /// Human-readable plugin name.
    pub display_name: String,
    /// Version shown in the host UI.
    pub display_version: String,
    /// Update-check mechanism.
    #[serde(rename = "type")]
    pub kind: String,
    /// Account holding the release repository.
    pub user: String,
    /// Release repository name.
    pub repo: String,
    /// Currently installed version.
    pub current: String,
    /// Archive URL template the host installs from.
    pub pip: String,
}

impl UpdateDescriptor {
    /// Descriptor for the running build.
    pub fn current() -> Self {
        let version = env!("CARGO_PKG_VERSION");
        Self {
            display_name: "LightsOut Plugin".into(),
            display_version: version.into(),
            kind: "github_release".into(),
            user: GITHUB_USER.into(),
            repo: GITHUB_REPO.into(),
            current: version.into(),
            pip: format!(
                "https://github.com/{GITHUB_USER}/{GITHUB_REPO}/archive/{{target_version}}.zip"
            ),
        }
    }
}
