//! # Interactive Console
//!
//! A line-oriented stand-in for the inventory screen: a live-filtered product table and a
//! five-input form that adds new products or edits existing ones.
//!
//! ## Structure
//!
//! - [`command`] - parsing one input line into a [`Command`]
//! - [`session`] - the staged buffer, add/edit mode and search query
//! - [`render`] - the product table and the form as text
//!
//! The console never owns the [`InventorySystem`]. It borrows the client for every command
//! and hands the system back when the input ends, so the caller can shut it down.
//!
//! ```rust,ignore
//! let system = InventorySystem::start(Config::default()).await?;
//! let system = Console::new(stdin, stdout).run(system).await?;
//! system.shutdown().await?;
//! ```

pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, HELP};
pub use session::{Mode, Saved, Session};

use crate::clients::{Confirm, DeleteOutcome, ProductClient};
use crate::lifecycle::{InventorySystem, SystemError};
use crate::model::UnknownField;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// A command that could not be carried out. Reported to the operator; the loop goes on.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("Unbalanced quotes")]
    UnbalancedQuotes,

    #[error("Not a product ID: {0:?}")]
    InvalidId(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("ID cannot be changed while editing; `cancel` to add a new product")]
    IdLocked,

    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Why the console stopped before its input ended.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    System(#[from] SystemError),
}

/// Reads the answer to a confirmation from the console's own input.
///
/// Only `y` or `yes` (any case) confirm. End of input declines.
pub struct Prompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

#[async_trait]
impl<'a, R, W> Confirm for Prompt<'a, R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&mut self, message: &str) -> bool {
        let question = format!("{message} [y/N] ");
        if self.output.write_all(question.as_bytes()).await.is_err()
            || self.output.flush().await.is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer).await {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the console and returns what it wrote.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads commands until `quit` or end of input, then hands the system back.
    ///
    /// `refresh` replaces the system with a freshly seeded one. A failed reload ends the
    /// loop with [`RunError::System`].
    pub async fn run(&mut self, mut system: InventorySystem) -> Result<InventorySystem, RunError> {
        self.say("Inventory console. Type `help` for commands.").await?;
        self.show_table(&system.product_client).await?;

        let mut line = String::new();
        loop {
            self.output.write_all(b"> ").await?;
            self.output.flush().await?;

            line.clear();
            if self.input.read_line(&mut line).await? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    self.say(&format!("Error: {e}")).await?;
                    continue;
                }
            };
            debug!(?command, "Command");

            match command {
                Command::Quit => break,
                Command::Refresh => {
                    system = system.reload().await?;
                    self.session.reset();
                    self.say("Reloaded; all changes discarded.").await?;
                    self.show_table(&system.product_client).await?;
                }
                command => self.execute(command, &system.product_client).await?,
            }
        }

        Ok(system)
    }

    async fn execute(&mut self, command: Command, client: &ProductClient) -> io::Result<()> {
        let outcome = match command {
            Command::List => Ok(Reply::Table),
            Command::Search(query) => {
                self.session.set_query(query);
                Ok(Reply::Table)
            }
            Command::Set(assignments) => assignments
                .into_iter()
                .try_for_each(|(field, value)| self.session.stage(field, value))
                .map(|()| Reply::Form),
            Command::Form => Ok(Reply::Form),
            Command::Edit(id) => match self.session.begin_edit(client, id).await {
                Ok(true) => Ok(Reply::Form),
                Ok(false) => Ok(Reply::Text(format!("No product with ID {id}"))),
                Err(e) => Err(e),
            },
            Command::Save => self.session.save(client).await.map(|saved| match saved {
                Saved::Added(id) => Reply::Changed(format!("Added product {id}")),
                Saved::Updated(product) => Reply::Changed(format!("Updated product {}", product.id)),
                Saved::Vanished(id) => {
                    Reply::Changed(format!("Product {id} no longer exists; nothing updated"))
                }
            }),
            Command::Cancel => {
                self.session.cancel();
                Ok(Reply::Form)
            }
            Command::Delete(id) => {
                let mut prompt = Prompt {
                    input: &mut self.input,
                    output: &mut self.output,
                };
                self.session
                    .delete(client, id, &mut prompt)
                    .await
                    .map(|outcome| match outcome {
                        DeleteOutcome::Declined => Reply::Text("Delete cancelled".to_string()),
                        DeleteOutcome::NotFound => {
                            Reply::Changed(format!("No product with ID {id}"))
                        }
                        DeleteOutcome::Deleted(product) => {
                            Reply::Changed(format!("Deleted product {} ({})", product.id, product.name))
                        }
                    })
            }
            Command::Help => Ok(Reply::Text(HELP.to_string())),
            Command::Refresh | Command::Quit => Ok(Reply::Text(String::new())),
        };

        match outcome {
            Ok(Reply::Text(text)) => self.say(&text).await,
            Ok(Reply::Form) => self.say(&render::form(&self.session)).await,
            Ok(Reply::Table) => self.show_table(client).await,
            Ok(Reply::Changed(text)) => {
                info!("{text}");
                self.say(&text).await?;
                self.show_table(client).await
            }
            Err(e) => {
                debug!(error = %e, "Command refused");
                self.say(&format!("Error: {e}")).await
            }
        }
    }

    async fn show_table(&mut self, client: &ProductClient) -> io::Result<()> {
        match self.session.view(client).await {
            Ok(products) => self.say(&render::product_table(&products)).await,
            Err(e) => self.say(&format!("Error: {e}")).await,
        }
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}

enum Reply {
    Text(String),
    Form,
    Table,
    /// The registry changed; the table follows the message.
    Changed(String),
}
