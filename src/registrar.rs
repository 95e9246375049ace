//! Editor Registrar Module
//!
//! Maintains a list of registered file-editor factories and dispatches a
//! file to the first factory able to edit it. Instance-owned: each UI shell
//! constructs its own registrar instead of sharing process-global state.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::EditorError;

// == Editor Probe ==
/// Outcome of asking a factory whether it can edit a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorProbe {
    /// The factory handles this file type
    CanEdit,
    /// The factory does not handle this file type
    CannotEdit,
    /// The factory can open the file but wants the user warned first
    /// (e.g. the content does not look like text)
    WithWarning(String),
}

// == Editor Factory Trait ==
/// A pluggable viewer/editor panel provider.
///
/// Factories are consulted in registration order; the first one whose probe
/// succeeds wins.
pub trait EditorFactory: Send + Sync {
    /// Human-readable factory name, used in logs and editor menus.
    fn name(&self) -> &str;

    /// Whether this factory can edit the given file.
    fn probe(&self, path: &Path) -> EditorProbe;
}

// == Editor Registrar ==
/// Ordered registry of [`EditorFactory`] values.
#[derive(Default)]
pub struct EditorRegistrar {
    factories: Vec<Arc<dyn EditorFactory>>,
}

impl EditorRegistrar {
    // == Constructors ==
    /// Creates an empty registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registrar with the built-in text editor factory registered.
    pub fn with_defaults() -> Self {
        let mut registrar = Self::new();
        registrar.register(Arc::new(TextEditorFactory));
        registrar
    }

    // == Register ==
    /// Appends a factory. Registration order is dispatch order.
    pub fn register(&mut self, factory: Arc<dyn EditorFactory>) {
        debug!(factory = factory.name(), "registered file editor");
        self.factories.push(factory);
    }

    // == Select ==
    /// Returns the first factory able to edit `path`, or None when no
    /// factory matches.
    ///
    /// When a factory answers with a warning, `confirm` is consulted with
    /// the warning text; declining cancels the whole selection.
    ///
    /// # Errors
    /// [`EditorError::Cancelled`] when the user declines a warning.
    pub fn select(
        &self,
        path: &Path,
        confirm: impl Fn(&str) -> bool,
    ) -> Result<Option<Arc<dyn EditorFactory>>, EditorError> {
        for factory in &self.factories {
            match factory.probe(path) {
                EditorProbe::CanEdit => return Ok(Some(Arc::clone(factory))),
                EditorProbe::WithWarning(warning) => {
                    if confirm(&warning) {
                        return Ok(Some(Arc::clone(factory)));
                    }
                    return Err(EditorError::Cancelled);
                }
                EditorProbe::CannotEdit => {}
            }
        }
        Ok(None)
    }

    // == Editors For ==
    /// All factories able to edit `path`, warnings treated as matches.
    /// Used to populate an "open with" style menu.
    pub fn editors_for(&self, path: &Path) -> Vec<Arc<dyn EditorFactory>> {
        self.factories
            .iter()
            .filter(|factory| factory.probe(path) != EditorProbe::CannotEdit)
            .map(Arc::clone)
            .collect()
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True when no factory is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

// == Text Editor Factory ==
/// Built-in factory for plain-text files.
///
/// Recognized extensions are edited directly; anything else gets a warning
/// so the user can still force-open a file that may not be text.
pub struct TextEditorFactory;

/// Extensions opened without warning
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "log", "cfg", "conf", "ini", "properties", "xml", "json", "yaml", "yml", "toml",
    "sh", "csv",
];

impl EditorFactory for TextEditorFactory {
    fn name(&self) -> &str {
        "text"
    }

    fn probe(&self, path: &Path) -> EditorProbe {
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                TEXT_EXTENSIONS.iter().any(|known| *known == ext)
            })
            .unwrap_or(false);

        if recognized {
            EditorProbe::CanEdit
        } else {
            EditorProbe::WithWarning(format!(
                "'{}' may not be a text file, open anyway?",
                path.display()
            ))
        }
    }
}
