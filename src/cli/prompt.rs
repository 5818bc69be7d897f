//! Interactive yes/no prompt for the Node.js CLI install

use crate::execution::{DecisionSource, OptionalDecision};
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Where the prompt loop currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptState {
    /// Waiting for (another round of) input
    Prompting,
    /// "Yes" was chosen
    Validated,
    /// "No" was chosen
    Skipped,
}

/// Blocking yes/no prompt over an injectable input source.
///
/// Anything other than "1" or "2" re-prompts; there is no timeout. Tests
/// supply canned responses by constructing the prompt over a byte slice.
pub struct InteractivePrompt<R> {
    input: R,
}

impl InteractivePrompt<BufReader<Stdin>> {
    /// Prompt over the process standard input
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> InteractivePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> DecisionSource for InteractivePrompt<R> {
    async fn decide(&mut self) -> io::Result<OptionalDecision> {
        let mut state = PromptState::Prompting;

        while state == PromptState::Prompting {
            println!("Do you want to install the Node.js CLI?");
            println!("  1) Yes");
            println!("  2) No");

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a choice was made",
                ));
            }

            state = match line.trim() {
                "1" => PromptState::Validated,
                "2" => PromptState::Skipped,
                other => {
                    println!("Please answer 1 or 2 (got {:?})", other);
                    PromptState::Prompting
                }
            };
        }

        Ok(match state {
            PromptState::Validated => OptionalDecision::Install,
            _ => OptionalDecision::Skip,
        })
    }
}
