//! Credential sources.
//!
//! A token lives for the length of one process and is never written out.
//! Its `Debug` and `Display` forms are redacted so it cannot leak into logs.

use crate::github::error::{GitHubError, GitHubResult};
use dialoguer::Password;
use log::debug;
use std::fmt;
use std::io::{BufRead, IsTerminal};

/// Opaque secret handed to the request builder.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Anything that can hand over a token at run time.
///
/// Sources may block (terminal input), so callers run them off the async
/// workers.
pub trait CredentialSource: Send + Sync {
    fn credential(&self) -> GitHubResult<Credential>;
}

/// Token read from standard input.
///
/// On a terminal the input is masked; when stdin is piped the first line is
/// taken as is. No format check is made; an empty or wrong token is only
/// caught by the remote answering 401.
#[derive(Debug, Clone)]
pub struct PromptCredential {
    prompt: String,
}

impl PromptCredential {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for PromptCredential {
    fn default() -> Self {
        Self::new("GitHub token")
    }
}

impl CredentialSource for PromptCredential {
    fn credential(&self) -> GitHubResult<Credential> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            debug!("stdin is not a terminal, reading token from the first line");
            return read_token_line(stdin.lock());
        }
        let token = Password::new()
            .with_prompt(&self.prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(Credential::new(token))
    }
}

/// Take one line as the token, without its line terminator.
///
/// End of input before any line yields an empty token.
pub fn read_token_line(mut reader: impl BufRead) -> GitHubResult<Credential> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| GitHubError::Prompt(e.to_string()))?;
    let token = line.strip_suffix('\n').unwrap_or(line.as_str());
    let token = token.strip_suffix('\r').unwrap_or(token);
    Ok(Credential::new(token))
}

/// Token taken from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new("GITHUB_TOKEN")
    }
}

impl CredentialSource for EnvCredential {
    fn credential(&self) -> GitHubResult<Credential> {
        std::env::var(&self.var)
            .map(Credential::new)
            .map_err(|_| GitHubError::AuthRequired)
    }
}

/// Fixed token, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticCredential(Credential);

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Credential::new(token))
    }
}

impl CredentialSource for StaticCredential {
    fn credential(&self) -> GitHubResult<Credential> {
        Ok(self.0.clone())
    }
}
