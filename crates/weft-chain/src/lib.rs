//! Assembles the bundler configuration graph for one build.
//!
//! Given a [`weft_config::BuildContext`] and the [`weft_paths::ProjectLayout`]
//! of a project, [`assemble`] produces a [`BuildGraph`]: entry points, output
//! settings, module resolution, an ordered list of transform rules, an ordered
//! list of pipeline stages and optimization settings. The graph is plain data
//! and serializes to JSON for the engine.
//!
//! # Example
//!
//! ```no_run
//! use weft_chain::assemble;
//! use weft_config::{BuildContext, Mode, Target};
//! use weft_paths::ProjectLayout;
//!
//! let layout = ProjectLayout::locate()?;
//! let ctx = BuildContext::new(Mode::Production, Target::WebApp);
//! let graph = assemble(&ctx, &layout);
//! assert!(graph.has_stage("mini-css-extract"));
//! # Ok::<(), weft_paths::PathError>(())
//! ```

mod assemble;
pub mod graph;
pub mod rule;
pub mod split;
pub mod stage;
pub mod steps;

pub use assemble::{Assembly, assemble};
pub use graph::{BuildGraph, Entry, Optimization, Output, Performance, Resolve};
pub use rule::{Loader, LoaderOptions, StoreExclusion, TransformRule};
pub use split::{CacheGroup, ChunkSelection, SplitChunks, VendorTest, chunk_id};
pub use stage::{Minimizer, PipelineStage, StageParams};
