//! Placeholder substitution and final URL assembly.
//!
//! # Responsibilities
//! - Parse a template into literal and `{name}` placeholder segments
//! - Substitute placeholder values from the call descriptor
//! - Serialize every unconsumed parameter into the query string
//!
//! # Design Decisions
//! - Placeholders are single-segment; catch-all, constraint, optional, and
//!   default syntax are rejected as UnsupportedTemplateFeature
//! - Path errors (missing or invalid placeholder values) surface before any
//!   query-serialization error, in template order
//! - Query pairs follow the descriptor's parameter declaration order
//! - Either a complete, correctly encoded URL or the first failure; no
//!   partial output

use super::encode;
use super::serializer::{self, CompositeStyle};
use crate::descriptor::{CallDescriptor, Value};
use crate::error::RouteError;
use crate::routing::RouteTemplate;

/// One parsed piece of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal text, slashes included.
    Literal(String),
    /// A `{name}` placeholder referencing a parameter.
    Placeholder(String),
}

/// Builds relative URLs from a matched template and a call descriptor.
///
/// Stateless per call; the only configuration is the composite query
/// convention, which defaults to the flattened style.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlBuilder {
    composite_style: CompositeStyle,
}

impl UrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_composite_style(style: CompositeStyle) -> Self {
        Self {
            composite_style: style,
        }
    }

    /// Resolve one template against one descriptor into a relative URL.
    ///
    /// A template with zero placeholders and zero remaining parameters
    /// returns the literal path unchanged.
    pub fn build(
        &self,
        route: &RouteTemplate,
        descriptor: &CallDescriptor,
    ) -> Result<String, RouteError> {
        let segments = parse_template(&route.template)?;

        let mut used = vec![false; descriptor.parameters.len()];
        let mut url = String::with_capacity(route.template.len());

        for segment in &segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Placeholder(name) => {
                    let index = descriptor
                        .parameters
                        .iter()
                        .position(|(parameter, _)| parameter == name)
                        .ok_or_else(|| RouteError::MissingParameter {
                            placeholder: name.clone(),
                        })?;
                    let (_, value) = &descriptor.parameters[index];
                    // A path segment cannot be empty, and sequences or
                    // composites have no single-segment rendering.
                    let scalar = match value {
                        Value::Scalar(scalar) => scalar,
                        Value::Absent | Value::Sequence(_) | Value::Composite(_) => {
                            return Err(RouteError::InvalidPathValue {
                                placeholder: name.clone(),
                            })
                        }
                    };
                    used[index] = true;
                    url.push_str(&encode::path_component(&scalar.to_string()));
                }
            }
        }

        let mut query = Vec::new();
        for (index, (name, value)) in descriptor.parameters.iter().enumerate() {
            if used[index] {
                continue;
            }
            query.extend(serializer::serialize(name, value, self.composite_style)?);
        }

        if !query.is_empty() {
            url.push('?');
            for (position, (key, value)) in query.iter().enumerate() {
                if position > 0 {
                    url.push('&');
                }
                url.push_str(key);
                url.push('=');
                url.push_str(value);
            }
        }

        tracing::debug!(
            controller = %descriptor.controller_name,
            action = %descriptor.action_name,
            url = %url,
            "Resolved route URL"
        );
        Ok(url)
    }
}

/// Split a template into literal runs and placeholder names.
fn parse_template(template: &str) -> Result<Vec<Segment>, RouteError> {
    let unsupported = |feature: String| RouteError::UnsupportedTemplateFeature {
        template: template.to_string(),
        feature,
    };

    let mut segments = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        if open > 0 {
            segments.push(Segment::Literal(rest[..open].to_string()));
        }
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| unsupported("unterminated placeholder".to_string()))?;
        let name = &after[..close];
        if name.is_empty() {
            return Err(unsupported("empty placeholder name".to_string()));
        }
        if let Some(tail) = name.strip_prefix('*') {
            return Err(unsupported(format!("catch-all placeholder {{*{tail}}}")));
        }
        if name.contains([':', '?', '=']) {
            return Err(unsupported(format!(
                "constraint or default syntax in placeholder {{{name}}}"
            )));
        }
        segments.push(Segment::Placeholder(name.to_string()));
        rest = &after[close + 1..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(template: &str, parameters: &[&str]) -> RouteTemplate {
        RouteTemplate::new(template, "FakeController", "Get", parameters.iter().copied())
    }

    #[test]
    fn test_placeholder_substitution_no_query() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("str", "TEST");
        let url = builder.build(&route("lowercase/{str}", &["str"]), &desc).unwrap();
        assert_eq!(url, "lowercase/TEST");
    }

    #[test]
    fn test_unused_parameter_goes_to_query() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("str", "test");
        let url = builder.build(&route("uppercase", &["str"]), &desc).unwrap();
        assert_eq!(url, "uppercase?str=test");
    }

    #[test]
    fn test_literal_template_without_parameters() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get");
        let url = builder.build(&route("api/ping", &[]), &desc).unwrap();
        assert_eq!(url, "api/ping");
    }

    #[test]
    fn test_query_order_follows_declaration_order() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get")
            .arg("id", 7)
            .arg("page", 2)
            .arg("sort", "asc");
        let url = builder.build(&route("items/{id}", &["id", "page", "sort"]), &desc).unwrap();
        assert_eq!(url, "items/7?page=2&sort=asc");
    }

    #[test]
    fn test_missing_placeholder_parameter() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get");
        let err = builder.build(&route("items/{id}", &["id"]), &desc).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParameter {
                placeholder: "id".into()
            }
        );
    }

    #[test]
    fn test_sequence_in_path_position() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get")
            .arg("id", Value::sequence(["a", "b"]));
        let err = builder.build(&route("items/{id}", &["id"]), &desc).unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidPathValue {
                placeholder: "id".into()
            }
        );
    }

    #[test]
    fn test_absent_in_path_position() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("id", Value::Absent);
        let err = builder.build(&route("items/{id}", &["id"]), &desc).unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidPathValue {
                placeholder: "id".into()
            }
        );
    }

    #[test]
    fn test_absent_is_omitted_from_query() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get")
            .arg("filter", Value::Absent)
            .arg("page", 1);
        let url = builder.build(&route("items", &["filter", "page"]), &desc).unwrap();
        assert_eq!(url, "items?page=1");
    }

    #[test]
    fn test_path_value_is_percent_encoded() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("name", "a b?c");
        let url = builder.build(&route("find/{name}", &["name"]), &desc).unwrap();
        assert_eq!(url, "find/a%20b%3Fc");
    }

    #[test]
    fn test_path_value_keeps_inner_slash() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("path", "docs/readme");
        let url = builder.build(&route("files/{path}", &["path"]), &desc).unwrap();
        assert_eq!(url, "files/docs/readme");
    }

    #[test]
    fn test_catch_all_placeholder_is_unsupported() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("rest", "x");
        let err = builder.build(&route("files/{*rest}", &["rest"]), &desc).unwrap_err();
        assert!(matches!(
            err,
            RouteError::UnsupportedTemplateFeature { .. }
        ));
    }

    #[test]
    fn test_constraint_syntax_is_unsupported() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("id", 1);
        let err = builder.build(&route("items/{id:int}", &["id"]), &desc).unwrap_err();
        assert!(matches!(
            err,
            RouteError::UnsupportedTemplateFeature { .. }
        ));
    }

    #[test]
    fn test_unterminated_placeholder_is_unsupported() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get");
        let err = builder.build(&route("items/{id", &["id"]), &desc).unwrap_err();
        assert!(matches!(
            err,
            RouteError::UnsupportedTemplateFeature { .. }
        ));
    }

    #[test]
    fn test_path_errors_surface_before_query_errors() {
        // The nested composite would fail serialization, but the missing
        // placeholder is detected first.
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get")
            .arg("bad", Value::composite([("Inner", Value::composite([("X", Value::from(1))]))]));
        let err = builder.build(&route("items/{id}", &["id", "bad"]), &desc).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParameter {
                placeholder: "id".into()
            }
        );
    }

    #[test]
    fn test_repeated_placeholder_consumes_once() {
        let builder = UrlBuilder::new();
        let desc = CallDescriptor::new("FakeController", "Get").arg("id", 5);
        let url = builder.build(&route("a/{id}/b/{id}", &["id"]), &desc).unwrap();
        assert_eq!(url, "a/5/b/5");
    }
}
