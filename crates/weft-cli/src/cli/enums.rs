use clap::ValueEnum;
use weft_config::{Mode, Target};

/// Build mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Development: in-memory output, readable errors, no hashing
    #[value(name = "dev", alias = "development")]
    Dev,

    /// Production: hashed, minified, split output on disk
    #[value(name = "prod", alias = "production")]
    Prod,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Dev => Mode::Development,
            ModeArg::Prod => Mode::Production,
        }
    }
}

/// Deployment target
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TargetArg {
    /// Single-page application
    #[value(name = "spa", alias = "web-app")]
    Spa,

    /// Progressive web app
    #[value(name = "pwa", alias = "installable-web-app")]
    Pwa,

    /// Server-side rendered application
    #[value(name = "ssr", alias = "server-rendered")]
    Ssr,

    /// Desktop shell; file names are never hashed
    #[value(name = "electron", alias = "embedded-desktop")]
    Electron,

    /// Mobile shell; file names are never hashed
    #[value(name = "cordova", alias = "embedded-mobile")]
    Cordova,
}

impl From<TargetArg> for Target {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Spa => Target::WebApp,
            TargetArg::Pwa => Target::InstallableWebApp,
            TargetArg::Ssr => Target::ServerRendered,
            TargetArg::Electron => Target::EmbeddedDesktop,
            TargetArg::Cordova => Target::EmbeddedMobile,
        }
    }
}
