//! Struct body parsing — raw declaration text → ordered field list.

use serde::{Deserialize, Serialize};

/// A single struct field: a type token, a name token, and an optional
/// semantic binding tag (`float4 position : POSITION0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub binding: Option<String>,
}

/// A named record type used to carry per-vertex or per-pixel data between
/// pipeline stages. Field order is preserved from the source text; it
/// determines varying slot order in the generated programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDefinition {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Result of parsing a struct body. Declarations that do not match the
/// accepted `<type> <name> [: <BINDING>]` shape are not an error: they land
/// in `skipped` and are otherwise dropped. Tests assert on this deliberately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBody {
    pub fields: Vec<Field>,
    pub skipped: Vec<String>,
}

/// Split a struct body on `;`, collapse whitespace, trim, discard empties,
/// and match each remaining candidate declaration.
pub fn parse_struct_body(body: &str) -> ParsedBody {
    let mut parsed = ParsedBody::default();
    for candidate in body.split(';') {
        let candidate = collapse_whitespace(candidate);
        if candidate.is_empty() {
            continue;
        }
        match parse_declaration(&candidate) {
            Some(field) => parsed.fields.push(field),
            None => parsed.skipped.push(candidate),
        }
    }
    parsed
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Leading run of word characters, as the original declaration pattern
/// captured it. `position:POSITION0` therefore yields the name `position`
/// with no binding; the tag is only recognized with a spaced colon.
fn word_prefix(token: &str) -> &str {
    let end = token
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(token.len());
    &token[..end]
}

fn parse_declaration(decl: &str) -> Option<Field> {
    let tokens: Vec<&str> = decl.split(' ').collect();
    let ty = tokens.first().copied().filter(|t| is_word(t))?;
    let name = word_prefix(tokens.get(1)?);
    if name.is_empty() {
        return None;
    }

    let binding = match (tokens.get(2), tokens.get(3)) {
        (Some(&":"), Some(tag)) if !word_prefix(tag).is_empty() => {
            Some(word_prefix(tag).to_string())
        }
        _ => None,
    };

    Some(Field {
        ty: ty.to_string(),
        name: name.to_string(),
        binding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field() {
        let parsed = parse_struct_body("float2 texCoord;");
        assert_eq!(
            parsed.fields,
            vec![Field {
                ty: "float2".into(),
                name: "texCoord".into(),
                binding: None,
            }]
        );
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_bound_field() {
        let parsed = parse_struct_body("float4 position : POSITION0;");
        assert_eq!(parsed.fields[0].binding.as_deref(), Some("POSITION0"));
    }

    #[test]
    fn test_field_order_is_preserved() {
        let parsed = parse_struct_body(
            "float4 position : POSITION0;\n    float2 texCoord : TEXCOORD0;\n    float3 normal;",
        );
        let names: Vec<&str> = parsed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["position", "texCoord", "normal"]);
    }

    #[test]
    fn test_malformed_declaration_is_dropped_not_reported() {
        let parsed = parse_struct_body("float4 position : POSITION0; garbage");
        assert_eq!(parsed.fields.len(), 1);
        assert_eq!(parsed.fields[0].name, "position");
        assert_eq!(parsed.skipped, vec!["garbage".to_string()]);
    }

    #[test]
    fn test_unspaced_colon_loses_the_binding() {
        let parsed = parse_struct_body("float4 position:POSITION0;");
        assert_eq!(parsed.fields[0].name, "position");
        assert_eq!(parsed.fields[0].binding, None);
    }

    #[test]
    fn test_repeated_whitespace_is_collapsed() {
        let parsed = parse_struct_body("float4\n        position   :   POSITION0;");
        assert_eq!(parsed.fields[0].name, "position");
        assert_eq!(parsed.fields[0].binding.as_deref(), Some("POSITION0"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(parse_struct_body("  \n  "), ParsedBody::default());
    }
}
