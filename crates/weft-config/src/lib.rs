pub mod context;
pub mod error;
mod helpers;
pub mod loader;
pub mod options;
pub mod pattern;

// Re-export main types
pub use context::{BuildContext, Mode, Target, WeftConfig};
pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use options::{
    AnalyzerMode, AnalyzerOptions, BuildOptions, CompressionOptions, FrameworkOptions, Switch,
    VendorOptions,
};
pub use pattern::Pattern;
