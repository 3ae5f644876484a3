// self
use crate::obs::RequestOutcome;

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("token_debug_get_token_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_request_outcome_without_recorder_is_noop() {
		record_request_outcome(RequestOutcome::Failure);
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn outcomes_are_counted_per_label() {
		// std
		use std::{
			collections::HashMap,
			sync::{
				Arc,
				atomic::{AtomicU64, Ordering},
			},
		};
		// crates.io
		use metrics::{
			Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString,
			Unit,
		};
		use parking_lot::Mutex;

		#[derive(Default)]
		struct Tally(AtomicU64);
		impl CounterFn for Tally {
			fn increment(&self, value: u64) {
				self.0.fetch_add(value, Ordering::SeqCst);
			}

			fn absolute(&self, value: u64) {
				self.0.store(value, Ordering::SeqCst);
			}
		}

		#[derive(Default)]
		struct OutcomeRecorder(Mutex<HashMap<String, Arc<Tally>>>);
		impl OutcomeRecorder {
			fn count(&self, outcome: &str) -> u64 {
				self.0.lock().get(outcome)
					.map_or(0, |tally| tally.0.load(Ordering::SeqCst))
			}
		}
		impl Recorder for OutcomeRecorder {
			fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
				assert_eq!(key.name(), "token_debug_get_token_total");

				let outcome = key
					.labels()
					.find(|label| label.key() == "outcome")
					.map(|label| label.value().to_owned())
					.expect("Every counter should carry an outcome label.");
				let tally = self.0.lock().entry(outcome).or_default().clone();

				Counter::from_arc(tally)
			}

			fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
				Gauge::noop()
			}

			fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
				Histogram::noop()
			}
		}

		let recorder = OutcomeRecorder::default();

		metrics::with_local_recorder(&recorder, || {
			record_request_outcome(RequestOutcome::Attempt);
			record_request_outcome(RequestOutcome::Attempt);
			record_request_outcome(RequestOutcome::Success);
			record_request_outcome(RequestOutcome::Failure);
		});

		assert_eq!(recorder.count("attempt"), 2);
		assert_eq!(recorder.count("success"), 1);
		assert_eq!(recorder.count("failure"), 1);
	}
}
