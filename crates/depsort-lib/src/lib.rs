//! # depsort Library
//!
//! Ordered transitive dependency closures for module graphs.
//!
//! ## Core Modules
//!
//! - [`graph`] - Module graph, closure queries and cycle detection
//! - [`primitives`] - Shared enums, errors and logger settings
//! - [`config`] - Environment-driven configuration
//! - [`logger`] - Structured logging with progress tracking
//!
//! ## Quick Start
//!
//! ```
//! use depsort_lib::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let t1 = builder.add_module("t1")?;
//! let t2 = builder.add_module("t2")?;
//! let t3 = builder.add_module("t3")?;
//! builder.add_dependency(&t3, &t2)?;
//! builder.add_dependency(&t2, &t1)?;
//!
//! let graph = builder.build();
//! assert_eq!(graph.closure(&t3)?, vec![t2, t1]);
//! # Ok::<(), depsort_lib::GraphError>(())
//! ```

pub mod config;
pub mod graph;
pub mod logger;
pub mod primitives;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use config::Config;
pub use graph::{Cycle, DependencyGraph, GraphBuilder, GraphError, Module};
pub use logger::Logger;
pub use primitives::{
    ColorIntent, ConfigError, LogContext, LogFormat, LogLevel, LogOutput, LoggerConfig,
    LoggerError, TraversalStrategy,
};
