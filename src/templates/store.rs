//! Template resolution and rendering entry point.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::templates::render::substitute;
use crate::templates::TemplateError;

/// Templates compiled into the binary. The filesystem tier shadows
/// these entries name-for-name.
const BUNDLED: &[(&str, &str)] = &[("hello", include_str!("../../templates/hello.html"))];

/// Resolves named templates against a local directory first, then the
/// bundled set, and renders them with a string context.
pub struct TemplateStore {
    dir: PathBuf,
    debug: bool,
}

impl TemplateStore {
    /// Create a store over the given directory. The directory does not
    /// need to exist; lookups then fall through to the bundled set.
    pub fn new(dir: impl AsRef<Path>, debug: bool) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            debug,
        }
    }

    /// Whether rendering failures should be reported verbosely.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Render the named template with the given context.
    pub fn render(
        &self,
        name: &str,
        context: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        let source = self.source(name)?;
        substitute(name, &source, context)
    }

    /// Resolve template source: `<dir>/<name>.html` on disk wins,
    /// otherwise the bundled copy.
    fn source(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.dir.join(format!("{name}.html"));
        match std::fs::read_to_string(&path) {
            Ok(source) => Ok(source),
            Err(e) if e.kind() == ErrorKind::NotFound => BUNDLED
                .iter()
                .find(|(bundled_name, _)| *bundled_name == name)
                .map(|(_, source)| (*source).to_string())
                .ok_or_else(|| TemplateError::NotFound {
                    name: name.to_string(),
                    dir: self.dir.display().to_string(),
                }),
            Err(e) => Err(TemplateError::Io {
                name: name.to_string(),
                source: e,
            }),
        }
    }
}
