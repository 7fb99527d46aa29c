use rsearch_core::error::{Error, Result};
use rsearch_core::types::{Fields, Record, Reply, SearchReply};

/// Shape of each document group in a search reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
	/// `id, score, [field, value, ...]`
	WithScores,
	/// `id, [field, value, ...]`
	NoScores,
}

impl ReplyMode {
	pub fn from_scores(with_scores: bool) -> Self {
		if with_scores { ReplyMode::WithScores } else { ReplyMode::NoScores }
	}

	pub fn chunk_size(self) -> usize {
		match self {
			ReplyMode::WithScores => 3,
			ReplyMode::NoScores => 2,
		}
	}
}

/// Decodes a flat search reply: `[total, id, (score,) fields, id, (score,) fields, ...]`.
///
/// A bare empty array decodes like `[0]`. Anything else that breaks the layout
/// (trailing partial group, odd field list, non-scalar id, non-UTF-8 text) is
/// `MalformedReply`.
pub fn parse_reply(reply: Reply, mode: ReplyMode) -> Result<SearchReply> {
	let chunk_size = mode.chunk_size();
	let items = match reply {
		Reply::Array(items) => items,
		other => return Err(malformed(format!("expected an array, got {}", other.kind()))),
	};
	let Some((first, rest)) = items.split_first() else {
		return Ok(SearchReply::default());
	};
	let total_count = total_count(first)?;
	if rest.len() % chunk_size != 0 {
		return Err(malformed(format!("{} trailing elements do not form groups of {}", rest.len(), chunk_size)));
	}
	let records = rest.chunks_exact(chunk_size).map(record_from_chunk).collect::<Result<Vec<_>>>()?;
	Ok(SearchReply { total_count, records })
}

fn record_from_chunk(chunk: &[Reply]) -> Result<Record> {
	let (id, score, values) = match chunk {
		[id, score, values] => (id, Some(score), values),
		[id, values] => (id, None, values),
		_ => return Err(malformed(format!("unexpected group of {} elements", chunk.len()))),
	};
	let id = scalar(id, "document id")?;
	let score = score.map(|s| scalar(s, "score")).transpose()?;
	let fields = field_pairs(values)?;
	Ok(Record { id, score, fields })
}

fn field_pairs(values: &Reply) -> Result<Fields> {
	let items = match values {
		Reply::Array(items) => items,
		// documents without stored fields come back as nil
		Reply::Nil => return Ok(Fields::new()),
		other => return Err(malformed(format!("expected a field list, got {}", other.kind()))),
	};
	if items.len() % 2 != 0 {
		return Err(malformed(format!("field list has odd length {}", items.len())));
	}
	let mut fields = Fields::new();
	for pair in items.chunks_exact(2) {
		if pair[1] == Reply::Nil { continue; }
		fields.insert(scalar(&pair[0], "field name")?, scalar(&pair[1], "field value")?);
	}
	Ok(fields)
}

fn total_count(first: &Reply) -> Result<u64> {
	match first {
		Reply::Int(n) => u64::try_from(*n).map_err(|_| malformed(format!("negative total count {n}"))),
		Reply::Str(s) => s.trim().parse().map_err(|_| malformed(format!("total count {s:?} is not a number"))),
		other => Err(malformed(format!("total count is {}", other.kind()))),
	}
}

fn scalar(reply: &Reply, what: &str) -> Result<String> {
	reply.as_text().ok_or_else(|| malformed(format!("{what} is {}", reply.kind())))
}

fn malformed(msg: String) -> Error { Error::MalformedReply(msg) }
