//! CommandPipeline: runs one chat event end to end.
//!
//! Generic over `S: RepoSearch` and `T: ChatTransport` so the same
//! orchestration runs against GitHub and Telegram in production and against
//! in-memory fakes in tests. The pipeline holds no per-request state and is
//! shared across concurrent webhook calls behind an `Arc`.
//!
//! Paths:
//! - `/search`: extract -> find repository -> render -> deliver one message.
//! - `/trend`: find trending -> select batch -> render each -> deliver each.
//!   Losing some of the batch is reported but not fatal; losing all of it is.
//!
//! On failure the user is notified in the chat (best effort) and a
//! [`PipelineFailure`] carrying the HTTP diagnostic is returned.

use repobot_types::chat::{ChatEvent, DeliveryReceipt};
use repobot_types::error::PipelineError;
use repobot_types::repo::{RepoRecord, TrendingPeriod};

use crate::chat::delivery::{DeliveryCoordinator, DeliverySummary};
use crate::chat::transport::ChatTransport;
use crate::command::dispatcher::{dispatch, Command, CommandKind};
use crate::command::extractor::extract;
use crate::response::renderer::{render, render_batch, RenderFailure};
use crate::response::selector::Selector;
use crate::search::provider::RepoSearch;

/// What the pipeline did with an event that did not fail.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Not a known command; nothing was looked up or sent.
    Ignored,
    /// A single repository was found and delivered.
    Searched {
        repository: RepoRecord,
        receipt: DeliveryReceipt,
    },
    /// A trending batch was rendered and sent item by item.
    Trending {
        summary: DeliverySummary,
        render_failures: Vec<RenderFailure>,
    },
}

impl PipelineOutcome {
    /// Body for the webhook HTTP response.
    ///
    /// Complete runs say nothing; a trending batch that lost some messages
    /// reports how many.
    pub fn diagnostic(&self) -> String {
        match self {
            PipelineOutcome::Trending { summary, .. } => match summary.verdict() {
                Ok(()) => String::new(),
                Err(e) => format!("an error has occurred, {e}!"),
            },
            _ => String::new(),
        }
    }
}

/// A command that aborted, with enough context to describe it.
#[derive(Debug)]
pub struct PipelineFailure {
    pub command: CommandKind,
    /// The raw message text that triggered the command.
    pub input: String,
    pub error: PipelineError,
}

impl PipelineFailure {
    /// Body for the webhook HTTP response.
    pub fn diagnostic(&self) -> String {
        match self.command {
            CommandKind::Search => {
                format!("invalid input {} with error {}", self.input, self.error)
            }
            CommandKind::Trend => format!("an error has occurred, {}!", self.error),
        }
    }
}

impl std::fmt::Display for PipelineFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} command failed: {}", self.command, self.error)
    }
}

impl std::error::Error for PipelineFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Command engine wired to a search backend and a chat transport.
pub struct CommandPipeline<S: RepoSearch, T: ChatTransport> {
    search: S,
    delivery: DeliveryCoordinator<T>,
    selector: Selector,
    period: TrendingPeriod,
}

impl<S: RepoSearch, T: ChatTransport> CommandPipeline<S, T> {
    pub fn new(search: S, transport: T, selector: Selector) -> Self {
        Self {
            search,
            delivery: DeliveryCoordinator::new(transport),
            selector,
            period: TrendingPeriod::default(),
        }
    }

    /// Look back over `period` instead of a single day for `/trend`.
    pub fn with_period(mut self, period: TrendingPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub fn transport(&self) -> &T {
        self.delivery.transport()
    }

    /// Process one event.
    pub async fn handle(&self, event: &ChatEvent) -> Result<PipelineOutcome, PipelineFailure> {
        let Some(command) = dispatch(event) else {
            tracing::info!(chat_id = %event.chat_id(), text = event.raw_text(), "ignoring unknown command");
            return Ok(PipelineOutcome::Ignored);
        };

        let kind = command.kind();
        tracing::info!(chat_id = %event.chat_id(), command = %kind, "handling command");

        let result = match command {
            Command::Search(text) => self.run_search(event, &text).await,
            Command::Trend(topic) => self.run_trending(event, &topic).await,
        };

        match result {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                tracing::warn!(
                    chat_id = %event.chat_id(),
                    command = %kind,
                    error = %error,
                    "command failed"
                );
                self.delivery
                    .notify_error(event.chat_id(), &error.to_string())
                    .await;
                Err(PipelineFailure {
                    command: kind,
                    input: event.raw_text().to_string(),
                    error,
                })
            }
        }
    }

    async fn run_search(
        &self,
        event: &ChatEvent,
        text: &str,
    ) -> Result<PipelineOutcome, PipelineError> {
        let query = extract(text)?;
        tracing::debug!(
            repo = query.repo_name(),
            language = query.language(),
            author = query.author(),
            "extracted search query"
        );

        let repository = self.search.find_repository(&query).await?;
        let message = render(&repository)?;
        let receipt = self.delivery.deliver_one(event.chat_id(), &message).await?;

        Ok(PipelineOutcome::Searched {
            repository,
            receipt,
        })
    }

    async fn run_trending(
        &self,
        event: &ChatEvent,
        topic: &str,
    ) -> Result<PipelineOutcome, PipelineError> {
        tracing::debug!(topic, period = %self.period, "looking up trending repositories");

        let candidates = self.search.find_trending(self.period, topic).await?;
        let batch = self.selector.select(candidates)?;
        let rendered = render_batch(&batch);

        if rendered.messages.is_empty() {
            return Err(PipelineError::NothingRendered(batch.len()));
        }

        let summary = self
            .delivery
            .deliver_batch(event.chat_id(), &rendered.messages)
            .await;

        if let Err(error) = summary.verdict() {
            if summary.delivered() == 0 {
                return Err(error.into());
            }
            tracing::warn!(
                chat_id = %event.chat_id(),
                error = %error,
                "trending batch partially delivered"
            );
        }

        Ok(PipelineOutcome::Trending {
            summary,
            render_failures: rendered.failures,
        })
    }
}
