//! Name-keyed registry of polynomial array functions
//!
//! Generic callers that only know an operation by name (`"amin"`,
//! `"minimum"`, ...) resolve it here. The process-wide registry returned by
//! [`Registry::global`] is populated once with every built-in
//! [`ArrayFunction`]; more handlers can be registered at any time.
//!
//! # Example
//!
//! ```
//! use numpoly::dispatch::{CallArgs, Output, Registry};
//! use numpoly::prelude::*;
//!
//! let client = CpuClient::new();
//! let q = PolyArray::variable(3)?;
//! let handler = Registry::global().resolve("argmax")?;
//! match handler(&client, &[q], &CallArgs::default())? {
//!     Output::Indices(index) => assert_eq!(index.item()?, 2),
//!     other => panic!("unexpected output {other:?}"),
//! }
//! # Ok::<(), numpoly::error::Error>(())
//! ```

use crate::array_ops::PolyArrayFunctions;
use crate::error::{Error, Result};
use crate::poly::{PolyArithmeticOps, PolyArray};
use crate::runtime::cpu::CpuClient;
use crate::tensor::Tensor;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Built-in array functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayFunction {
    /// Element-wise absolute value
    Absolute,
    /// Smallest element
    Amin,
    /// Largest element
    Amax,
    /// Index of the smallest element
    Argmin,
    /// Index of the largest element
    Argmax,
    /// Element-wise minimum of two arrays
    Minimum,
    /// Element-wise maximum of two arrays
    Maximum,
    /// Number of non-zero elements
    CountNonzero,
    /// Ascending sort
    Sort,
    /// Element-wise equality
    Equal,
}

impl ArrayFunction {
    /// Every built-in function
    pub const ALL: [ArrayFunction; 10] = [
        ArrayFunction::Absolute,
        ArrayFunction::Amin,
        ArrayFunction::Amax,
        ArrayFunction::Argmin,
        ArrayFunction::Argmax,
        ArrayFunction::Minimum,
        ArrayFunction::Maximum,
        ArrayFunction::CountNonzero,
        ArrayFunction::Sort,
        ArrayFunction::Equal,
    ];

    /// Registry key of the function
    pub fn name(&self) -> &'static str {
        match self {
            ArrayFunction::Absolute => "absolute",
            ArrayFunction::Amin => "amin",
            ArrayFunction::Amax => "amax",
            ArrayFunction::Argmin => "argmin",
            ArrayFunction::Argmax => "argmax",
            ArrayFunction::Minimum => "minimum",
            ArrayFunction::Maximum => "maximum",
            ArrayFunction::CountNonzero => "count_nonzero",
            ArrayFunction::Sort => "sort",
            ArrayFunction::Equal => "equal",
        }
    }

    fn arity(&self) -> usize {
        match self {
            ArrayFunction::Minimum | ArrayFunction::Maximum | ArrayFunction::Equal => 2,
            _ => 1,
        }
    }

    fn call(
        &self,
        client: &CpuClient,
        inputs: &[PolyArray],
        args: &CallArgs,
    ) -> Result<Output> {
        if inputs.len() != self.arity() {
            return Err(Error::invalid_argument(
                "inputs",
                format!(
                    "{} takes {} polynomial arrays, got {}",
                    self.name(),
                    self.arity(),
                    inputs.len()
                ),
            ));
        }
        let a = &inputs[0];
        let axis = args.axis;
        let output = match self {
            ArrayFunction::Absolute => Output::Poly(client.poly_absolute(a)?),
            ArrayFunction::Amin => Output::Poly(client.poly_amin(a, axis)?),
            ArrayFunction::Amax => Output::Poly(client.poly_amax(a, axis)?),
            ArrayFunction::Argmin => Output::Indices(client.poly_argmin(a, axis)?),
            ArrayFunction::Argmax => Output::Indices(client.poly_argmax(a, axis)?),
            ArrayFunction::Minimum => Output::Poly(client.poly_minimum(a, &inputs[1])?),
            ArrayFunction::Maximum => Output::Poly(client.poly_maximum(a, &inputs[1])?),
            ArrayFunction::CountNonzero => Output::Indices(client.poly_count_nonzero(a, axis)?),
            ArrayFunction::Sort => Output::Poly(client.poly_sort(a, axis)?),
            ArrayFunction::Equal => Output::Mask(client.poly_equal(a, &inputs[1])?),
        };
        Ok(output)
    }
}

impl fmt::Display for ArrayFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArrayFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ArrayFunction::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::UnknownFunction { key: s.to_string() })
    }
}

/// Optional arguments of an array function call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallArgs {
    /// Axis to operate along; `None` means the flattened array
    pub axis: Option<isize>,
}

impl CallArgs {
    /// Operate along `axis`
    pub fn with_axis(mut self, axis: isize) -> Self {
        self.axis = Some(axis);
        self
    }
}

/// Result of an array function call
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    /// A polynomial array
    Poly(PolyArray),
    /// Indices or counts
    Indices(Tensor<i64>),
    /// Boolean mask
    Mask(Tensor<bool>),
}

/// Handler stored in the registry
pub type Handler = Arc<dyn Fn(&CpuClient, &[PolyArray], &CallArgs) -> Result<Output> + Send + Sync>;

/// Mapping from function name to handler
pub struct Registry {
    handlers: RwLock<HashMap<String, Handler>>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registry holding every built-in [`ArrayFunction`]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for function in ArrayFunction::ALL {
            registry.register(function.name(), move |client, inputs, args| {
                function.call(client, inputs, args)
            });
        }
        registry
    }

    /// The process-wide registry, populated with the built-ins on first use
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Self::with_builtins)
    }

    /// Register `handler` under `key`, replacing any previous handler
    pub fn register<F>(&self, key: impl Into<String>, handler: F)
    where
        F: Fn(&CpuClient, &[PolyArray], &CallArgs) -> Result<Output> + Send + Sync + 'static,
    {
        let key = key.into();
        tracing::debug!(key = %key, "registering array function");
        self.handlers.write().insert(key, Arc::new(handler));
    }

    /// Look up the handler for `key`
    pub fn resolve(&self, key: &str) -> Result<Handler> {
        self.handlers
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::UnknownFunction {
                key: key.to_string(),
            })
    }

    /// Whether a handler is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.read().contains_key(key)
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.handlers.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Resolve `key` and call it
    pub fn call(
        &self,
        key: &str,
        client: &CpuClient,
        inputs: &[PolyArray],
        args: &CallArgs,
    ) -> Result<Output> {
        let handler = self.resolve(key)?;
        handler(client, inputs, args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("keys", &self.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = Registry::with_builtins();
        for function in ArrayFunction::ALL {
            assert!(registry.contains(function.name()));
            assert_eq!(function.name().parse::<ArrayFunction>().unwrap(), function);
        }
        assert!(matches!(
            registry.resolve("cumsum"),
            Err(Error::UnknownFunction { .. })
        ));
    }

    #[test]
    fn test_register_custom_handler() {
        let registry = Registry::new();
        registry.register("identity", |_, inputs, _| Ok(Output::Poly(inputs[0].clone())));
        let client = CpuClient::new();
        let x = PolyArray::symbol("x").unwrap();
        let out = registry
            .call("identity", &client, &[x.clone()], &CallArgs::default())
            .unwrap();
        assert_eq!(out, Output::Poly(x));
    }

    #[test]
    fn test_arity_checked() {
        let client = CpuClient::new();
        let x = PolyArray::symbol("x").unwrap();
        let err = Registry::global()
            .call("minimum", &client, &[x], &CallArgs::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
