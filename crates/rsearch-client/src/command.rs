use rsearch_core::types::SchemaField;

use crate::options::HighlightTags;

pub const SCHEMA: &str = "SCHEMA";
pub const WITHSCORES: &str = "WITHSCORES";
pub const HIGHLIGHT: &str = "HIGHLIGHT";
pub const TAGS: &str = "TAGS";

/// `[index, "SCHEMA", field1, attr1_1, ..., field2, ...]`
pub fn create_command(index: &str, schema: &[SchemaField]) -> Vec<String> {
	let len = 2 + schema.iter().map(|s| 1 + s.attributes.len()).sum::<usize>();
	let mut args = Vec::with_capacity(len);
	args.push(index.to_string());
	args.push(SCHEMA.to_string());
	for field in schema {
		args.push(field.field.clone());
		args.extend(field.attributes.iter().cloned());
	}
	args
}

/// `[index, term..., ["WITHSCORES"], ["HIGHLIGHT", "TAGS", open, close]]`
pub fn search_args<S: AsRef<str>>(index: &str, terms: &[S], with_scores: bool, highlight: Option<&HighlightTags>) -> Vec<String> {
	let mut args = Vec::with_capacity(1 + terms.len() + 5);
	args.push(index.to_string());
	args.extend(terms.iter().map(|t| t.as_ref().to_string()));
	if with_scores { args.push(WITHSCORES.to_string()); }
	if let Some(tags) = highlight {
		args.push(HIGHLIGHT.to_string());
		args.push(TAGS.to_string());
		args.push(tags.open.clone());
		args.push(tags.close.clone());
	}
	args
}
