//! Name-keyed signature table.
//!
//! Keyed by the full command name, not a hash of it: a colliding hash can
//! never silently alias two commands. The map still hashes with `FxHash`
//! internally, which is plenty for short ASCII names.

use rustc_hash::FxHashMap;

use crate::errors::RegisterError;
use crate::signature::{CommandFn, CommandSignature, ParamSpec};

/// Owns every registered [`CommandSignature`].
#[derive(Debug, Default)]
pub struct Registry {
    table: FxHashMap<String, CommandSignature>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            table: FxHashMap::default(),
        }
    }

    /// Register a command.
    ///
    /// Names and parameter declarations are copied in; the caller keeps
    /// nothing alive. Required parameters precede optional ones in the
    /// stored signature.
    pub fn register(
        &mut self,
        name: &str,
        handler: CommandFn,
        required_params: Vec<ParamSpec>,
        optional_params: Vec<ParamSpec>,
        result: ParamSpec,
    ) -> Result<(), RegisterError> {
        if name.is_empty() {
            return Err(RegisterError::EmptyName);
        }
        let required = u16::try_from(required_params.len()).map_err(|_| {
            RegisterError::TooManyParameters {
                count: required_params.len(),
            }
        })?;
        if optional_params.len() > usize::from(u16::MAX) {
            return Err(RegisterError::TooManyParameters {
                count: optional_params.len(),
            });
        }
        if self.table.contains_key(name) {
            return Err(RegisterError::DuplicateName {
                name: name.to_owned(),
            });
        }

        let mut params = required_params;
        params.extend(optional_params);
        let signature =
            CommandSignature::new(name.to_owned(), handler, params, required, result);
        self.table.insert(name.to_owned(), signature);
        Ok(())
    }

    /// Unregister a command, dropping its signature and everything it owns.
    pub fn unregister(&mut self, name: &str) -> Result<(), RegisterError> {
        match self.table.remove(name) {
            Some(_) => Ok(()),
            None => Err(RegisterError::NotRegistered {
                name: name.to_owned(),
            }),
        }
    }

    /// Whether `name` is registered. Pure lookup, never fails.
    pub fn is_registered(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Look up a signature by name.
    pub fn lookup(&self, name: &str) -> Option<&CommandSignature> {
        self.table.get(name)
    }

    /// Registered command names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
