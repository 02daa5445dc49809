//! GraphQL search query for the headless server
//!
//! The feed always runs the same search; keeping it as a typed value means a
//! different page or site is a field change, not string surgery.

use serde::Serialize;

/// Sort order of the `search` field; the feed only ever pages by
/// modification date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    ModificationDateAsc,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::ModificationDateAsc => write!(f, "MODIFICATION_DATE_ASC"),
        }
    }
}

/// Full-text search over one document type of one site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub offset: u32,
    pub limit: u32,
    pub doc_type: String,
    pub sort_field: SortField,
    pub site_id: String,
}

impl SearchQuery {
    /// The article page the feed is built from
    pub fn articles(site_id: impl Into<String>) -> Self {
        Self {
            query: "*".to_string(),
            offset: 3,
            limit: 10,
            doc_type: "CMArticle".to_string(),
            sort_field: SortField::ModificationDateAsc,
            site_id: site_id.into(),
        }
    }

    /// Render the GraphQL document text
    pub fn to_graphql(&self) -> String {
        format!(
            r#"{{
  content {{
    search(query: {query}, offset: {offset}, limit: {limit}, docTypes: [{doc_type}], sortFields: [{sort}], siteId: {site_id}) {{
      numFound
      result {{
        ... on {fragment} {{
          creationDate
          title
          teaserText
          remoteLink
          picture {{
            data {{
              size
              contentType
            }}
            uriTemplate
            crops {{
              name
              minWidth
            }}
          }}
        }}
      }}
    }}
  }}
}}"#,
            query = string_literal(&self.query),
            offset = self.offset,
            limit = self.limit,
            doc_type = string_literal(&self.doc_type),
            sort = self.sort_field,
            site_id = string_literal(&self.site_id),
            fragment = self.doc_type,
        )
    }

    pub fn to_request(&self) -> GraphQlRequest {
        GraphQlRequest {
            query: self.to_graphql(),
        }
    }
}

/// JSON string escaping is a valid GraphQL string literal
fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// POST body of a GraphQL request
#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}
