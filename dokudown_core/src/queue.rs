//! Serialized conversion for callers that receive lines asynchronously.
//!
//! A single tokio task owns the [`LineTransformer`] and applies lines in the
//! order they were submitted. Finishing closes the queue and waits for the
//! task, so the document is never finalized while a line is still pending.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::DokuError;
use crate::DokuResult;
use crate::LineTransformer;
use crate::TransformOptions;

/// Lines buffered between the submitter and the conversion task.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

#[derive(Debug)]
pub struct SerializedTransformer {
	sender: mpsc::Sender<String>,
	task: JoinHandle<Vec<String>>,
}

impl SerializedTransformer {
	/// Spawn the conversion task on the current tokio runtime.
	pub fn spawn(options: TransformOptions) -> Self {
		Self::with_capacity(options, DEFAULT_QUEUE_CAPACITY)
	}

	pub fn with_capacity(options: TransformOptions, capacity: usize) -> Self {
		let (sender, mut receiver) = mpsc::channel::<String>(capacity.max(1));
		let task = tokio::spawn(async move {
			let mut transformer = LineTransformer::with_options(options);
			while let Some(line) = receiver.recv().await {
				transformer.process_line(&line);
			}

			transformer.finish()
		});

		Self { sender, task }
	}

	/// Queue the next line. Waits while the queue is full.
	pub async fn submit(&self, line: impl Into<String>) -> DokuResult<()> {
		self.sender
			.send(line.into())
			.await
			.map_err(|_| DokuError::QueueClosed)
	}

	/// Close the queue and return the finished document once every submitted
	/// line has been applied.
	pub async fn finish(self) -> DokuResult<Vec<String>> {
		let Self { sender, task } = self;
		drop(sender);

		task.await.map_err(|e| {
			tracing::error!(error = %e, "conversion task failed");
			DokuError::QueueClosed
		})
	}
}
