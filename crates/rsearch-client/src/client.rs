use std::time::Instant;

use tracing::{debug, info, warn};

use rsearch_core::error::{Error, Result};
use rsearch_core::traits::Engine;
use rsearch_core::types::{Command, NewRecordCommand, QueryRequest, Reply, SchemaField, SearchReply, SearchResult};

use crate::command::{create_command, search_args};
use crate::options::ClientOptions;
use crate::reply::{parse_reply, ReplyMode};

/// Async facade over an engine connection.
///
/// Every operation sends exactly one command and waits for its reply, except
/// [`create_index`](Self::create_index) which first awaits an existence check.
/// Failures are `Result`s throughout; [`check_index_exists`](Self::check_index_exists)
/// and [`search`](Self::search) fold them into `false` / [`SearchResult::error`].
pub struct SearchClient<E> {
	engine: E,
	options: ClientOptions,
}

impl<E: Engine> SearchClient<E> {
	pub fn new(engine: E, options: ClientOptions) -> Self { Self { engine, options } }

	pub fn options(&self) -> &ClientOptions { &self.options }

	pub fn engine(&self) -> &E { &self.engine }

	async fn send(&self, command: Command, args: &[String]) -> Result<Reply> {
		debug!(%command, ?args, "sending command");
		let pending = self.engine.send_command(command, args);
		match self.options.timeout {
			Some(limit) => tokio::time::timeout(limit, pending).await.map_err(|_| Error::Timeout(limit))?.map_err(Error::from),
			None => pending.await.map_err(Error::from),
		}
	}

	/// Probes `FT.INFO` for the index; any failure is returned as-is.
	pub async fn try_check_index_exists(&self, index: &str) -> Result<()> {
		self.send(Command::Info, &[index.to_string()]).await.map(|_| ())
	}

	/// `true` when the engine answers `FT.INFO` for the index.
	///
	/// Any failure counts as "does not exist", including transport errors and timeouts.
	pub async fn check_index_exists(&self, index: &str) -> bool {
		info!(index, "checking index");
		match self.try_check_index_exists(index).await {
			Ok(()) => true,
			Err(e) => { debug!(index, error = %e, "index info failed; treating as missing"); false }
		}
	}

	/// Creates the index unless it already exists. `FT.CREATE` is only sent after
	/// the existence check has completed and reported no index.
	pub async fn create_index(&self, index: &str, schema: &[SchemaField]) -> Result<()> {
		if self.check_index_exists(index).await {
			return Err(Error::AlreadyExists(index.to_string()));
		}
		let args = create_command(index, schema);
		info!(index, fields = schema.len(), "creating index");
		self.send(Command::Create, &args).await?;
		Ok(())
	}

	pub async fn try_search<S: AsRef<str>>(&self, index: &str, terms: &[S]) -> Result<SearchReply> {
		self.run_search(index, terms, self.options.with_scores, self.options.highlight).await
	}

	/// Runs a search with the client's modifiers. Failures land in `error`.
	pub async fn search<S: AsRef<str>>(&self, index: &str, terms: &[S]) -> SearchResult {
		let outcome = self.try_search(index, terms).await;
		if let Err(e) = &outcome { warn!(index, error = %e, "search failed"); }
		outcome.into()
	}

	pub async fn try_search_request(&self, request: &QueryRequest) -> Result<SearchReply> {
		self.run_search(&request.index_key, &request.terms, request.with_scores, request.highlight).await
	}

	/// Like [`search`](Self::search), with the request's own modifiers.
	pub async fn search_request(&self, request: &QueryRequest) -> SearchResult {
		let outcome = self.try_search_request(request).await;
		if let Err(e) = &outcome { warn!(index = %request.index_key, error = %e, "search failed"); }
		outcome.into()
	}

	async fn run_search<S: AsRef<str>>(&self, index: &str, terms: &[S], with_scores: bool, highlight: bool) -> Result<SearchReply> {
		let query = terms.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
		debug!(index, %query, "searching");
		let tags = highlight.then_some(&self.options.highlight_tags);
		let args = search_args(index, terms, with_scores, tags);
		let started = Instant::now();
		let reply = self.send(Command::Search, &args).await?;
		let parsed = parse_reply(reply, ReplyMode::from_scores(with_scores))?;
		debug!(index, total = parsed.total_count, returned = parsed.records.len(), elapsed_ms = started.elapsed().as_millis() as u64, "search finished");
		Ok(parsed)
	}

	/// Sends the raw `FT.ADD` tokens unchanged and echoes them back on success.
	pub async fn add_document(&self, command: NewRecordCommand) -> Result<NewRecordCommand> {
		self.send(Command::Add, &command).await?;
		Ok(command)
	}
}
