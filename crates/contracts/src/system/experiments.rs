use serde::{Deserialize, Serialize};

/// Experimental features the form knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experiment {
    WorkspacePrebuilds,
}

impl Experiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Experiment::WorkspacePrebuilds => "workspace-prebuilds",
        }
    }
}

/// Experiments enabled on the deployment (`GET /api/v2/experiments`).
///
/// Unknown names are kept so that the list round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Experiments(pub Vec<String>);

impl Experiments {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn is_enabled(&self, experiment: Experiment) -> bool {
        self.0.iter().any(|e| e == experiment.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_enabled() {
        let experiments: Experiments =
            serde_json::from_str(r#"["auto-fill-parameters","workspace-prebuilds"]"#).unwrap();
        assert!(experiments.is_enabled(Experiment::WorkspacePrebuilds));
        assert!(!Experiments::default().is_enabled(Experiment::WorkspacePrebuilds));
        assert!(!Experiments::new(["workspace-prebuild"]).is_enabled(Experiment::WorkspacePrebuilds));
    }
}
