use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    hash::BuildHasher,
};

use serde::Serialize;
use tracing::trace;

use crate::error::{EnvVarError, Error, Result};

/// A source of environment variables.
///
/// The parser never touches the process environment directly, everything goes through this trait
/// so callers (and tests) can hand it any mapping they like.
pub trait EnvSource {
    /// Returns the value of the variable `name`, or `None` if it isn't set.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads variables from the environment of the current process.
///
/// Variables whose value isn't valid Unicode are considered unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// The default environment variables GitHub sets for every job.
///
/// https://docs.github.com/en/actions/learn-github-actions/variables#default-environment-variables
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Env {
    pub ci: bool,
    pub home: String,
    pub github_workflow: String,
    pub github_run_id: i64,
    pub github_run_number: i64,
    pub github_action: String,
    pub github_actions: bool,
    pub github_actor: String,
    pub github_repository: String,
    pub github_event_name: String,
    pub github_event_path: String,
    pub github_workspace: String,
    pub github_sha: String,
    pub github_ref: String,
    pub github_head_ref: String,
    pub github_base_ref: String,
    #[serde(skip_serializing)]
    pub github_token: String,
}

impl Env {
    /// Reads every variable from `source`, in a fixed order, stopping at the first one that can't
    /// be converted to its field's type.
    pub fn from_source<E: EnvSource + ?Sized>(source: &E) -> Result<Self> {
        let reader = Reader(source);

        Ok(Self {
            ci: reader.boolean("CI")?,
            home: reader.string("HOME"),
            github_workflow: reader.string("GITHUB_WORKFLOW"),
            github_run_id: reader.integer("GITHUB_RUN_ID")?,
            github_run_number: reader.integer("GITHUB_RUN_NUMBER")?,
            github_action: reader.string("GITHUB_ACTION"),
            github_actions: reader.boolean("GITHUB_ACTIONS")?,
            github_actor: reader.string("GITHUB_ACTOR"),
            github_repository: reader.string("GITHUB_REPOSITORY"),
            github_event_name: reader.string("GITHUB_EVENT_NAME"),
            github_event_path: reader.string("GITHUB_EVENT_PATH"),
            github_workspace: reader.string("GITHUB_WORKSPACE"),
            github_sha: reader.string("GITHUB_SHA"),
            github_ref: reader.string("GITHUB_REF"),
            github_head_ref: reader.string("GITHUB_HEAD_REF"),
            github_base_ref: reader.string("GITHUB_BASE_REF"),
            github_token: reader.string("GITHUB_TOKEN"),
        })
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.github_token.is_empty() {
            ""
        } else {
            "<redacted>"
        };

        f.debug_struct("Env")
            .field("ci", &self.ci)
            .field("home", &self.home)
            .field("github_workflow", &self.github_workflow)
            .field("github_run_id", &self.github_run_id)
            .field("github_run_number", &self.github_run_number)
            .field("github_action", &self.github_action)
            .field("github_actions", &self.github_actions)
            .field("github_actor", &self.github_actor)
            .field("github_repository", &self.github_repository)
            .field("github_event_name", &self.github_event_name)
            .field("github_event_path", &self.github_event_path)
            .field("github_workspace", &self.github_workspace)
            .field("github_sha", &self.github_sha)
            .field("github_ref", &self.github_ref)
            .field("github_head_ref", &self.github_head_ref)
            .field("github_base_ref", &self.github_base_ref)
            .field("github_token", &token)
            .finish()
    }
}

struct Reader<'a, E: ?Sized>(&'a E);

impl<E: EnvSource + ?Sized> Reader<'_, E> {
    /// Unset string variables read as empty, like they would in a shell.
    fn string(&self, name: &'static str) -> String {
        // values aren't logged, GITHUB_TOKEN is one of them
        trace!("reading {}", name);
        self.0.var(name).unwrap_or_default()
    }

    fn required(&self, name: &'static str) -> Result<String> {
        self.0.var(name).ok_or_else(|| Error::EnvParse {
            name,
            source: EnvVarError::Missing,
        })
    }

    fn boolean(&self, name: &'static str) -> Result<bool> {
        let value = self.required(name)?;
        trace!("{}={:?}", name, value);

        match parse_bool(&value) {
            Some(b) => Ok(b),
            None => Err(Error::EnvParse {
                name,
                source: EnvVarError::InvalidBool(value),
            }),
        }
    }

    fn integer(&self, name: &'static str) -> Result<i64> {
        let value = self.required(name)?;
        trace!("{}={:?}", name, value);

        value.parse().map_err(|source| Error::EnvParse {
            name,
            source: EnvVarError::InvalidInt { value, source },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_bool() {
        for literal in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(literal), Some(true), "{}", literal);
        }
        for literal in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(literal), Some(false), "{}", literal);
        }
        for literal in ["", "yes", "no", "tRuE", " true", "2"] {
            assert_eq!(parse_bool(literal), None, "{:?}", literal);
        }
    }

    #[test]
    fn unset_strings_are_empty() {
        let env = Env::from_source(&source(&[
            ("CI", "true"),
            ("GITHUB_RUN_ID", "1"),
            ("GITHUB_RUN_NUMBER", "2"),
            ("GITHUB_ACTIONS", "1"),
        ]))
        .unwrap();

        assert!(env.ci);
        assert!(env.github_actions);
        assert_eq!(env.github_run_id, 1);
        assert_eq!(env.github_run_number, 2);
        assert_eq!(env.home, "");
        assert_eq!(env.github_token, "");
    }

    #[test]
    fn missing_typed_variable() {
        let err = Env::from_source(&source(&[
            ("CI", "true"),
            ("GITHUB_RUN_ID", "1"),
            ("GITHUB_ACTIONS", "true"),
        ]))
        .unwrap_err();

        match err {
            Error::EnvParse {
                name: "GITHUB_RUN_NUMBER",
                source: EnvVarError::Missing,
            } => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn invalid_integer() {
        let err = Env::from_source(&source(&[
            ("CI", "true"),
            ("GITHUB_RUN_ID", "12abc"),
            ("GITHUB_RUN_NUMBER", "2"),
            ("GITHUB_ACTIONS", "true"),
        ]))
        .unwrap_err();

        match err {
            Error::EnvParse {
                name: "GITHUB_RUN_ID",
                source: EnvVarError::InvalidInt { value, .. },
            } => assert_eq!(value, "12abc"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn first_failure_wins() {
        // both CI and GITHUB_ACTIONS are invalid, CI is read first
        let err = Env::from_source(&source(&[
            ("CI", "yes"),
            ("GITHUB_RUN_ID", "1"),
            ("GITHUB_RUN_NUMBER", "2"),
            ("GITHUB_ACTIONS", "no"),
        ]))
        .unwrap_err();

        assert!(matches!(err, Error::EnvParse { name: "CI", .. }));
    }

    #[test]
    fn typed_readers() {
        let vars = source(&[("CI", "False"), ("GITHUB_ACTIONS", "maybe")]);
        let reader = Reader(&vars);

        assert!(!reader.boolean("CI").unwrap());
        match reader.boolean("GITHUB_ACTIONS") {
            Err(Error::EnvParse {
                name: "GITHUB_ACTIONS",
                source: EnvVarError::InvalidBool(value),
            }) => assert_eq!(value, "maybe"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            reader.required("HOME"),
            Err(Error::EnvParse {
                name: "HOME",
                source: EnvVarError::Missing,
            })
        ));
    }

    #[test]
    fn token_is_redacted() {
        let env = Env::from_source(&source(&[
            ("CI", "true"),
            ("GITHUB_RUN_ID", "1"),
            ("GITHUB_RUN_NUMBER", "2"),
            ("GITHUB_ACTIONS", "true"),
            ("GITHUB_TOKEN", "ghs_s3cr3t"),
        ]))
        .unwrap();

        assert_eq!(env.github_token, "ghs_s3cr3t");
        assert!(!format!("{:?}", env).contains("ghs_s3cr3t"));
        assert!(!serde_json::to_string(&env).unwrap().contains("ghs_s3cr3t"));
    }

    #[test]
    fn btree_and_reference_sources() {
        let mut vars = BTreeMap::new();
        vars.insert("HOME".to_string(), "/home/runner".to_string());

        assert_eq!(vars.var("HOME").as_deref(), Some("/home/runner"));
        assert_eq!((&vars).var("HOME").as_deref(), Some("/home/runner"));
        assert_eq!(vars.var("CI"), None);
    }
}
