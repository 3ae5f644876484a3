//! Shared fixtures for integration tests: a capturing tracing layer and credential helpers.

#![allow(dead_code)]

// std
use std::{collections::HashMap, error::Error as StdError, fmt::Debug, sync::Arc};
// crates.io
use parking_lot::Mutex;
use tracing::{
	Event, Level, Subscriber,
	field::{Field, Visit},
	subscriber::DefaultGuard,
};
use tracing_subscriber::{
	Layer,
	layer::{Context, SubscriberExt},
};
// self
use token_debug::auth::{ScopeSet, TokenRequest};

/// Event recorded by [`LogCapture`].
#[derive(Clone, Debug)]
pub struct CapturedEvent {
	pub level: Level,
	pub target: String,
	pub message: String,
	pub fields: HashMap<String, String>,
}
impl CapturedEvent {
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str)
	}

	/// Message plus every field value, for "never appears anywhere" assertions.
	pub fn rendered(&self) -> String {
		let mut out = self.message.clone();

		for value in self.fields.values() {
			out.push(' ');
			out.push_str(value);
		}

		out
	}
}

/// Layer that stores every event emitted on the current thread while its guard lives.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<CapturedEvent>>>);
impl LogCapture {
	/// Installs the capture as the thread-local default subscriber.
	///
	/// Pair with current-thread tokio tests so every poll happens under the guard.
	pub fn install() -> (Self, DefaultGuard) {
		let capture = Self::default();
		let guard =
			tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

		(capture, guard)
	}

	pub fn events(&self) -> Vec<CapturedEvent> {
		self.0.lock().clone()
	}

	pub fn messages(&self) -> Vec<String> {
		self.0.lock().iter().map(|event| event.message.clone()).collect()
	}

	pub fn at_level(&self, level: Level) -> Vec<CapturedEvent> {
		self.0.lock().iter().filter(|event| event.level == level).cloned().collect()
	}

	pub fn find(&self, message: &str) -> Option<CapturedEvent> {
		self.0.lock().iter().find(|event| event.message.starts_with(message)).cloned()
	}
}
impl<S> Layer<S> for LogCapture
where
	S: Subscriber,
{
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut fields = HashMap::new();

		event.record(&mut FieldVisitor(&mut fields));

		let message = fields.remove("message").unwrap_or_default();

		self.0.lock().push(CapturedEvent {
			level: *event.metadata().level(),
			target: event.metadata().target().to_owned(),
			message,
			fields,
		});
	}
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);
impl Visit for FieldVisitor<'_> {
	fn record_str(&mut self, field: &Field, value: &str) {
		self.0.insert(field.name().to_owned(), value.to_owned());
	}

	fn record_i64(&mut self, field: &Field, value: i64) {
		self.0.insert(field.name().to_owned(), value.to_string());
	}

	fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
		self.0.insert(field.name().to_owned(), format!("{value:?}"));
	}

	/// Renders the error followed by each of its sources, like the fmt layer does.
	fn record_error(&mut self, field: &Field, value: &(dyn StdError + 'static)) {
		let mut rendered = value.to_string();
		let mut source = value.source();

		while let Some(cause) = source {
			rendered.push_str(": ");
			rendered.push_str(&cause.to_string());

			source = cause.source();
		}

		self.0.insert(field.name().to_owned(), rendered);
	}
}

pub fn request(scopes: &[&str]) -> TokenRequest {
	TokenRequest::new(
		ScopeSet::new(scopes.iter().copied()).expect("Scope fixture should be valid."),
	)
}
