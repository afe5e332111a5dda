//! Query string of the create page.
//!
//! `?template=<id>&mode=auto&name=dev&version=<id>&disable_params=region,zone&param.region=eu`

use std::collections::BTreeMap;

use contracts::domain::a001_template::{TemplateId, TemplateVersionId};
use contracts::domain::a003_workspace::{AutofillBuildParameter, AutofillSource};
use contracts::usecases::u501_create_workspace::CreateWorkspaceMode;

const PARAM_PREFIX: &str = "param.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateWorkspaceQuery {
    pub template_id: Option<TemplateId>,
    pub mode: CreateWorkspaceMode,
    pub default_name: Option<String>,
    pub version_id: Option<TemplateVersionId>,
    pub disabled_params: Vec<String>,
    pub autofill: Vec<AutofillBuildParameter>,
}

impl CreateWorkspaceQuery {
    /// Parse a query string with or without the leading `?`.
    ///
    /// Pairs are decoded one by one: a malformed pair is skipped without
    /// losing the rest, and the first occurrence of a repeated key wins.
    pub fn parse(search: &str) -> Self {
        let raw = decode_pairs(search.trim_start_matches('?'));

        let non_empty = |key: &str| {
            raw.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let autofill = raw
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(PARAM_PREFIX)
                    .filter(|name| !name.is_empty())
                    .map(|name| AutofillBuildParameter::new(name, value.as_str(), AutofillSource::Url))
            })
            .collect();

        Self {
            template_id: non_empty("template")
                .and_then(|v| v.parse::<uuid::Uuid>().ok().map(TemplateId::new)),
            mode: CreateWorkspaceMode::from_query(raw.get("mode").map(String::as_str)),
            default_name: non_empty("name"),
            version_id: non_empty("version")
                .and_then(|v| v.parse::<uuid::Uuid>().ok().map(TemplateVersionId::new)),
            disabled_params: non_empty("disable_params")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            autofill,
        }
    }

    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }
}

fn decode_pairs(search: &str) -> BTreeMap<String, String> {
    let mut raw = BTreeMap::new();
    for pair in search.split('&').filter(|p| !p.is_empty()) {
        match serde_qs::from_str::<BTreeMap<String, String>>(pair) {
            Ok(decoded) => {
                for (key, value) in decoded {
                    raw.entry(key).or_insert(value);
                }
            }
            Err(e) => log::warn!("Ignoring malformed query pair {:?}: {}", pair, e),
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let template = "0b7c3d5e-7f5c-4a41-9b7e-0c1d2e3f4a5b";
        let q = CreateWorkspaceQuery::parse(&format!(
            "?template={}&mode=duplicate&name=my-box&disable_params=region,%20instance_type&param.region=us-east&param.cpu=4",
            template
        ));

        assert_eq!(q.template_id.map(|t| t.to_string()), Some(template.to_string()));
        assert_eq!(q.mode, CreateWorkspaceMode::Duplicate);
        assert_eq!(q.default_name.as_deref(), Some("my-box"));
        assert_eq!(q.version_id, None);
        assert_eq!(q.disabled_params, vec!["region", "instance_type"]);
        assert_eq!(
            q.autofill,
            vec![
                AutofillBuildParameter::new("cpu", "4", AutofillSource::Url),
                AutofillBuildParameter::new("region", "us-east", AutofillSource::Url),
            ]
        );
    }

    #[test]
    fn test_parse_empty_query() {
        assert_eq!(CreateWorkspaceQuery::parse(""), CreateWorkspaceQuery::default());
        assert_eq!(CreateWorkspaceQuery::parse("?"), CreateWorkspaceQuery::default());
    }

    #[test]
    fn test_invalid_ids_and_blank_values_are_dropped() {
        let q = CreateWorkspaceQuery::parse("template=nope&version=&name=%20&mode=auto&param.=x");
        assert_eq!(q.template_id, None);
        assert_eq!(q.version_id, None);
        assert_eq!(q.default_name, None);
        assert_eq!(q.mode, CreateWorkspaceMode::Auto);
        assert!(q.autofill.is_empty());
    }

    const TEMPLATE: &str = "0b7c3d5e-7f5c-4a41-9b7e-0c1d2e3f4a5b";

    #[test]
    fn test_repeated_param_keeps_first_value_and_template() {
        let q = CreateWorkspaceQuery::parse(&format!(
            "template={}&param.region=eu&param.region=us",
            TEMPLATE
        ));
        assert_eq!(q.template_id.map(|t| t.to_string()), Some(TEMPLATE.to_string()));
        assert_eq!(
            q.autofill,
            vec![AutofillBuildParameter::new("region", "eu", AutofillSource::Url)]
        );
    }

    #[test]
    fn test_bracketed_key_is_skipped_alone() {
        let q = CreateWorkspaceQuery::parse(&format!(
            "template={}&param.tags[0]=a&param.zone=b&mode=auto",
            TEMPLATE
        ));
        assert_eq!(q.template_id.map(|t| t.to_string()), Some(TEMPLATE.to_string()));
        assert_eq!(q.mode, CreateWorkspaceMode::Auto);
        assert_eq!(
            q.autofill,
            vec![AutofillBuildParameter::new("zone", "b", AutofillSource::Url)]
        );
    }
}
