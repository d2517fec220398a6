use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use crate::core::types::RecordId;

/// Application metadata record, the main record type indexed by the store.
///
/// Empty strings and empty collections are left out when serialized, so a
/// partially filled `App` works as a structural query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub license: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Release::is_empty")]
    pub release: Release,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(skip_serializing_if = "Maintainer::is_empty")]
    pub author: Maintainer,
}

impl App {
    pub fn new(title: &str) -> Self {
        App {
            title: title.to_string(),
            ..App::default()
        }
    }

    pub fn with_maintainer(mut self, name: &str, email: &str) -> Self {
        self.maintainers.push(Maintainer::new(name, email));
        self
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = company.to_string();
        self
    }

    pub fn with_release(mut self, release: Release) -> Self {
        self.release = release;
        self
    }

    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }
}

impl Maintainer {
    pub fn new(name: &str, email: &str) -> Self {
        Maintainer {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

impl Release {
    pub fn new(name: &str, author: Maintainer) -> Self {
        Release {
            name: name.to_string(),
            comment: String::new(),
            author,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.comment.is_empty() && self.author.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_fields_are_omitted() {
        let app = App::new("t1").with_maintainer("bob", "");
        assert_eq!(
            serde_json::to_value(&app).unwrap(),
            json!({"title": "t1", "maintainers": [{"name": "bob"}]})
        );
        assert_eq!(serde_json::to_value(App::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_partial_json_deserializes() {
        let app: App = serde_json::from_value(json!({
            "id": "3",
            "title": "Valid App",
            "release": {"author": {"email": "a@b.com"}},
            "labels": {"env": "prod"}
        }))
        .unwrap();

        assert_eq!(app.id, Some(RecordId(3)));
        assert_eq!(app.release.author.email, "a@b.com");
        assert_eq!(app.labels["env"], "prod");
        assert!(app.maintainers.is_empty());
    }
}
