//! Front-matter extraction and parsing.
//!
//! Decodes the fenced metadata block at the top of a markdown
//! document: YAML between `---` fences or TOML between `+++` fences.
//! Parsing goes through the markdown AST rather than hand-rolled fence
//! splitting, so edge cases (fences inside code blocks, missing
//! closing fence) follow the markdown grammar.

use anyhow::{Context, Result, anyhow};
use markdown::mdast::Node;
use serde_json::{Map, Value};

/// A markdown document split into parsed attributes and body text.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Attribute mapping decoded from the front-matter block. Empty
    /// when the document has no front-matter.
    pub attrs: Map<String, Value>,
    /// Source text with the front-matter block removed.
    pub body: String,
}

/// Parse a markdown source into front-matter attributes and body.
///
/// # Errors
///
/// Returns an error if the markdown cannot be parsed, the front-matter
/// block is not valid YAML/TOML, or it decodes to something other than
/// a mapping.
pub fn parse(source: &str) -> Result<Document> {
    let mut options = markdown::ParseOptions::default();
    options.constructs.frontmatter = true;

    let ast = markdown::to_mdast(source, &options)
        .map_err(|e| anyhow!("failed to parse markdown: {}", e))?;
    let Node::Root(root) = &ast else {
        return Err(anyhow!("expected root node, got {:?}", ast));
    };

    // Front-matter is only recognized as the first node of the document.
    let Some(first) = root.children.first() else {
        return Ok(Document {
            attrs: Map::new(),
            body: source.to_string(),
        });
    };

    let (value, position) = match first {
        Node::Yaml(node) => {
            let value: Value = serde_saphyr::from_str(&node.value)
                .context("failed to parse YAML front-matter")?;
            (value, node.position.as_ref())
        }
        Node::Toml(node) => {
            let value: toml::Value =
                toml::from_str(&node.value).context("failed to parse TOML front-matter")?;
            let value =
                serde_json::to_value(&value).context("failed to convert TOML to JSON")?;
            (value, node.position.as_ref())
        }
        _ => {
            return Ok(Document {
                attrs: Map::new(),
                body: source.to_string(),
            });
        }
    };

    let attrs = match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(anyhow!(
                "front-matter must be a mapping of attribute names to values, got {}",
                json_type_name(&other)
            ));
        }
    };

    let body = match position {
        Some(pos) => source.get(pos.end.offset..).unwrap_or("").trim_start_matches('\n'),
        None => source,
    };

    Ok(Document {
        attrs,
        body: body.to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
