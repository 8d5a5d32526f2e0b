//! SPARQL helpers for cross-referencing synsets with DBpedia.
//!
//! These are standalone utilities; the HTTP lookup surface does not call
//! them per request.

use serde_json::Value;

use super::error::{LinkedDataError, LinkedDataResult};
use crate::config::BlookupConfig;

const DBPEDIA_ONTOLOGY: &str = "http://dbpedia.org/ontology/";
const DBPEDIA_RESOURCE: &str = "http://dbpedia.org/resource/";
const DBPEDIA_PROPERTY: &str = "http://dbpedia.org/property/";

/// Client for SELECT queries against one SPARQL endpoint
#[derive(Debug, Clone)]
pub struct SparqlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SparqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Client talking to the configured endpoint
    pub fn from_config(config: &BlookupConfig) -> Self {
        Self::new(config.sparql_endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query the ontology types of a DBpedia resource
    pub async fn dbpedia_types(&self, resource: &str) -> LinkedDataResult<Vec<String>> {
        let query = format!("SELECT ?type WHERE {{ <{}> a ?type }}", sanitize(resource));
        let document = self.run_select(&query).await?;
        Ok(extract_dbpedia_types(&document))
    }

    /// Enumerate (resource, ontology-type) pairs, paged by limit/offset
    pub async fn ontology_pairs(
        &self,
        limit: usize,
        offset: usize,
    ) -> LinkedDataResult<Vec<(String, String)>> {
        let query = format!(
            "SELECT ?resource ?type WHERE {{ ?resource a ?type . \
             FILTER(STRSTARTS(STR(?type), \"{}\")) }} LIMIT {} OFFSET {}",
            DBPEDIA_ONTOLOGY, limit, offset
        );
        let document = self.run_select(&query).await?;
        bindings(&document)
            .iter()
            .map(|binding| {
                let resource = binding["resource"]["value"]
                    .as_str()
                    .ok_or_else(|| LinkedDataError::Malformed("missing ?resource".to_string()))?;
                let class = binding["type"]["value"]
                    .as_str()
                    .ok_or_else(|| LinkedDataError::Malformed("missing ?type".to_string()))?;
                Ok((resource.to_string(), class.to_string()))
            })
            .collect()
    }

    async fn run_select(&self, query: &str) -> LinkedDataResult<Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("format", "application/sparql-results+json"),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Percent-encode characters that are illegal in URI references.
///
/// DBpedia resource names carry quotes, backticks and spaces verbatim;
/// they must be escaped before the URI is embedded in a SPARQL query.
pub fn sanitize(uri: &str) -> String {
    let mut out = String::with_capacity(uri.len());
    for c in uri.chars() {
        match c {
            '"' | '`' | '<' | '>' | '{' | '}' | '|' | '\\' | '^' | ' ' => {
                out.push('%');
                out.push_str(&format!("{:02X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}

/// Abbreviate well-known DBpedia namespaces
pub fn abbr(uri: &str) -> String {
    if let Some(rest) = uri.strip_prefix(DBPEDIA_ONTOLOGY) {
        format!("dbo:{}", rest)
    } else if let Some(rest) = uri.strip_prefix(DBPEDIA_RESOURCE) {
        format!("dbr:{}", rest)
    } else if let Some(rest) = uri.strip_prefix(DBPEDIA_PROPERTY) {
        format!("dbp:{}", rest)
    } else {
        uri.to_string()
    }
}

/// Extract DBpedia ontology class URIs from a SPARQL JSON result document
pub fn extract_dbpedia_types(document: &Value) -> Vec<String> {
    bindings(document)
        .iter()
        .filter_map(|binding| binding["type"]["value"].as_str())
        .filter(|uri| uri.starts_with(DBPEDIA_ONTOLOGY))
        .map(str::to_string)
        .collect()
}

fn bindings(document: &Value) -> Vec<Value> {
    document["results"]["bindings"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize() {
        assert_eq!(
            sanitize("http://dbpedia.org/resource/Irwin_\"Ike\"_H._Hoover"),
            "http://dbpedia.org/resource/Irwin_%22Ike%22_H._Hoover"
        );
        assert_eq!(
            sanitize("http://dbpedia.org/resource/Jang_`Ali"),
            "http://dbpedia.org/resource/Jang_%60Ali"
        );
        assert_eq!(
            sanitize("http://dbpedia.org/resource/The_Hague"),
            "http://dbpedia.org/resource/The_Hague"
        );
    }

    #[test]
    fn test_abbr() {
        assert_eq!(abbr("http://dbpedia.org/ontology/City"), "dbo:City");
        assert_eq!(abbr("http://dbpedia.org/resource/The_Hague"), "dbr:The_Hague");
        assert_eq!(abbr("http://dbpedia.org/property/name"), "dbp:name");
        assert_eq!(
            abbr("http://www.w3.org/2002/07/owl#Thing"),
            "http://www.w3.org/2002/07/owl#Thing"
        );
    }

    #[test]
    fn test_extract_dbpedia_types_keeps_only_ontology_classes() {
        let document = json!({
            "results": {
                "bindings": [
                    {"type": {"value": "http://dbpedia.org/ontology/City"}},
                    {"type": {"value": "http://www.w3.org/2002/07/owl#Thing"}},
                    {"type": {"value": "http://dbpedia.org/ontology/Settlement"}}
                ]
            }
        });

        assert_eq!(
            extract_dbpedia_types(&document),
            vec![
                "http://dbpedia.org/ontology/City".to_string(),
                "http://dbpedia.org/ontology/Settlement".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_dbpedia_types_tolerates_missing_bindings() {
        assert!(extract_dbpedia_types(&json!({})).is_empty());
    }

    #[test]
    fn test_client_takes_endpoint_from_config() {
        let config = BlookupConfig {
            sparql_endpoint: "http://localhost:8890/sparql".to_string(),
            ..Default::default()
        };
        let client = SparqlClient::from_config(&config);
        assert_eq!(client.endpoint(), "http://localhost:8890/sparql");

        let client = SparqlClient::from_config(&BlookupConfig::default());
        assert_eq!(client.endpoint(), "https://dbpedia.org/sparql");
    }
}
