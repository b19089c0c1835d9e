//! Typed access to the context of a GitHub Actions run.
//!
//! A job gets its context from a set of default environment variables, and from a JSON file
//! describing the event that triggered the workflow. [`parse_run`] reads both and returns a
//! [`Run`], or the first error it stumbled upon.
//!
//! ```no_run
//! let run = github_run::Run::from_env()?;
//! println!("{}/{}: {}", run.owner, run.repository, run.payload);
//! # Ok::<(), github_run::Error>(())
//! ```

pub mod env;
pub mod error;
pub mod events;
mod run;
pub(crate) mod utils;

pub use env::{Env, EnvSource, ProcessEnv};
pub use error::{DecodeError, EnvVarError, Error, Result};
pub use events::{parse_webhook, EventType, GitHubEvent};
pub use run::{parse_run, Run};
