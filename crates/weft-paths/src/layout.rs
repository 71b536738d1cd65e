//! Directories derived from the project root.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use path_clean::PathClean;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::locate::find_root;

static GLOBAL: OnceCell<ProjectLayout> = OnceCell::new();

/// Name of the third-party package directory.
const STORE_DIR: &str = "node_modules";

/// Where third-party packages are resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// `<root>/node_modules`
    Local,
    /// `<root>/../../node_modules`, shared by sibling projects.
    Shared,
}

/// Platform-specific source overlay directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Pwa,
    Ssr,
    Cordova,
    Electron,
}

impl Overlay {
    pub const ALL: [Overlay; 4] = [Overlay::Pwa, Overlay::Ssr, Overlay::Cordova, Overlay::Electron];

    pub fn dir_name(self) -> &'static str {
        match self {
            Overlay::Pwa => "src-pwa",
            Overlay::Ssr => "src-ssr",
            Overlay::Cordova => "src-cordova",
            Overlay::Electron => "src-electron",
        }
    }
}

/// Every directory the assembler needs, resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    /// Directory holding the marker file.
    pub root: PathBuf,
    /// Install directory of the weft toolchain (its own helper packages live here).
    pub cli_dir: PathBuf,
    pub src_dir: PathBuf,
    pub pwa_dir: PathBuf,
    pub ssr_dir: PathBuf,
    pub cordova_dir: PathBuf,
    pub electron_dir: PathBuf,
    /// Two levels above the root; candidate home of a shared package store.
    pub workspace_root: PathBuf,
    pub dependency_store: PathBuf,
    pub store_kind: StoreKind,
}

impl ProjectLayout {
    /// Derives the layout for a known root.
    ///
    /// Performs the single existence check that picks the dependency store.
    pub fn new(root: impl Into<PathBuf>, cli_dir: impl Into<PathBuf>) -> Self {
        let root = root.into().clean();
        let workspace_root = root.join("..").join("..").clean();
        let (dependency_store, store_kind) = select_store(&root, &workspace_root);

        info!(
            root = %root.display(),
            store = %dependency_store.display(),
            kind = ?store_kind,
            "resolved project layout"
        );

        Self {
            cli_dir: cli_dir.into().clean(),
            src_dir: root.join("src"),
            pwa_dir: root.join(Overlay::Pwa.dir_name()),
            ssr_dir: root.join(Overlay::Ssr.dir_name()),
            cordova_dir: root.join(Overlay::Cordova.dir_name()),
            electron_dir: root.join(Overlay::Electron.dir_name()),
            workspace_root,
            dependency_store,
            store_kind,
            root,
        }
    }

    /// Searches upward from `start` for the marker file and derives the layout.
    pub fn discover(start: &Path, cli_dir: impl Into<PathBuf>) -> Result<Self> {
        let found = find_root(start)?;
        Ok(Self::new(found.root, cli_dir))
    }

    /// Discovers the layout from the process working directory.
    pub fn locate() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover(&cwd, install_dir()?)
    }

    /// Process-wide layout, located on first use and cached afterwards.
    ///
    /// A failed lookup is not cached, so the caller decides what happens next.
    pub fn global() -> Result<&'static ProjectLayout> {
        GLOBAL.get_or_try_init(Self::locate)
    }

    pub fn app(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    pub fn src(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.src_dir.join(rel)
    }

    pub fn cli(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.cli_dir.join(rel)
    }

    pub fn store(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.dependency_store.join(rel)
    }

    pub fn overlay_dir(&self, overlay: Overlay) -> &Path {
        match overlay {
            Overlay::Pwa => &self.pwa_dir,
            Overlay::Ssr => &self.ssr_dir,
            Overlay::Cordova => &self.cordova_dir,
            Overlay::Electron => &self.electron_dir,
        }
    }

    pub fn overlay(&self, overlay: Overlay, rel: impl AsRef<Path>) -> PathBuf {
        self.overlay_dir(overlay).join(rel)
    }

    /// True when the workspace-level store is in use.
    pub fn in_workspace(&self) -> bool {
        self.store_kind == StoreKind::Shared
    }
}

fn select_store(root: &Path, workspace_root: &Path) -> (PathBuf, StoreKind) {
    let shared = workspace_root.join(STORE_DIR);
    if shared.exists() {
        (shared, StoreKind::Shared)
    } else {
        (root.join(STORE_DIR), StoreKind::Local)
    }
}

/// Install directory of the running toolchain.
///
/// `WEFT_CLI_DIR` wins when set; otherwise the directory above the one holding
/// the executable (`<prefix>/bin/weft` gives `<prefix>`).
pub fn install_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("WEFT_CLI_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe()?;
    let bin_dir = exe.parent().unwrap_or(Path::new("."));
    Ok(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}
