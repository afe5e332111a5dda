//! Random workspace name suggestions ("brave-otter").

use contracts::shared::validation::MAX_NAME_LENGTH;
use rand::seq::SliceRandom;
use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "able", "agile", "amber", "ample", "bold", "brave", "bright", "brisk", "calm", "clever",
    "cosmic", "crisp", "daring", "eager", "early", "fancy", "fast", "fresh", "gentle", "glad",
    "golden", "grand", "happy", "hardy", "humble", "jolly", "keen", "kind", "lively", "lucky",
    "merry", "mighty", "modest", "noble", "polite", "proud", "quick", "quiet", "rapid", "ready",
    "shiny", "silent", "silver", "smart", "snowy", "solid", "steady", "sunny", "swift", "tidy",
    "vivid", "warm", "wise", "witty", "young", "zesty",
];

const ANIMALS: &[&str] = &[
    "alpaca", "badger", "beaver", "bison", "camel", "cheetah", "condor", "coyote", "crane",
    "dingo", "dolphin", "eagle", "falcon", "ferret", "finch", "gazelle", "gecko", "heron",
    "ibex", "iguana", "jackal", "jaguar", "koala", "lemur", "leopard", "llama", "lynx",
    "marmot", "meerkat", "moose", "narwhal", "ocelot", "orca", "otter", "panda", "pelican",
    "penguin", "puffin", "quail", "rabbit", "raven", "salmon", "seal", "sparrow", "tapir",
    "tiger", "toucan", "turtle", "walrus", "weasel", "wombat", "yak", "zebra",
];

/// Random lower-case `adjective-animal` name that passes the workspace name rule.
pub fn generate_workspace_name() -> String {
    generate_workspace_name_with(&mut rand::thread_rng())
}

pub fn generate_workspace_name_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("happy");
    let animal = ANIMALS.choose(rng).copied().unwrap_or("otter");

    let mut name = format!("{}-{}", adjective, animal);
    name.truncate(MAX_NAME_LENGTH);
    name.trim_end_matches('-').to_string()
}

/// Name currently offered next to the name field.
///
/// Accepting it hands the name out and immediately rolls a different one.
/// Existing workspace names are not consulted; the server reports conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuggestion {
    current: String,
}

impl NameSuggestion {
    pub fn new() -> Self {
        Self {
            current: generate_workspace_name(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn accept(&mut self) -> String {
        self.accept_with(&mut rand::thread_rng())
    }

    pub fn accept_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let next = loop {
            let candidate = generate_workspace_name_with(rng);
            if candidate != self.current {
                break candidate;
            }
        };
        std::mem::replace(&mut self.current, next)
    }
}

impl Default for NameSuggestion {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::validate_workspace_name;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_names_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let name = generate_workspace_name_with(&mut rng);
            assert!(validate_workspace_name(&name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_accept_returns_current_and_rerolls() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut suggestion = NameSuggestion::new();
        for _ in 0..50 {
            let shown = suggestion.current().to_string();
            let accepted = suggestion.accept_with(&mut rng);
            assert_eq!(accepted, shown);
            assert_ne!(suggestion.current(), accepted);
        }
    }
}
