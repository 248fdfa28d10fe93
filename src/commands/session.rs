use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::{debug, info};

use super::console::{Console, RULE};
use super::convert::{self, Outcome};
use super::SessionError;
use crate::services::conversion_service::ConversionEngine;
use crate::services::history_service::History;
use crate::services::rate_service::RateProvider;

/// The interactive converter: owns the console and the history for one run
pub struct Session<E, R, W> {
    provider: Arc<dyn RateProvider>,
    engine: E,
    console: Console<R, W>,
    history: History,
}

impl<E, R, W> Session<E, R, W>
where
    E: ConversionEngine,
    R: BufRead,
    W: Write,
{
    pub fn new(provider: Arc<dyn RateProvider>, engine: E, console: Console<R, W>) -> Self {
        Self {
            provider,
            engine,
            console,
            history: History::new(),
        }
    }

    /// Convert until the user answers 0 (or input ends).
    ///
    /// Closed input counts as choosing to exit. Only console I/O failures
    /// are returned as errors; the history collected so far is kept either way.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        self.console.say(format!("{}\n\nWELCOME TO THE CURRENCY CONVERTER\n", RULE))?;

        match self.converse().await {
            Ok(()) => {}
            Err(SessionError::InputClosed) => info!("Input closed, ending session"),
            Err(e) => return Err(e),
        }

        self.console
            .say("Thank you for using the currency converter. See you soon!")?;
        Ok(())
    }

    async fn converse(&mut self) -> Result<(), SessionError> {
        loop {
            let outcome = convert::execute(&mut self.console, self.provider.as_ref(), &self.engine).await?;
            match outcome {
                Outcome::Converted(record) => self.history.append(record),
                Outcome::FetchFailed(e) => debug!("Conversion aborted, rates unavailable: {}", e),
                Outcome::ConversionFailed(e) => debug!("Conversion aborted: {}", e),
            }

            if !self.console.read_continue()? {
                return Ok(());
            }
        }
    }

    /// End the session, handing over the history for persistence
    pub fn into_history(self) -> History {
        self.history
    }
}
