//! Loading and saving the variable file.

use std::path::Path;

use keylist::Bindings;

/// Loads the variables from `path`.
///
/// A missing file yields an empty set of variables.
pub fn load(path: &Path) -> Result<Bindings, Box<dyn std::error::Error>> {
    match std::fs::read_to_string(path) {
        Ok(json) => {
            let vars = Bindings::from_json(&json)
                .map_err(|e| format!("invalid variable file {}: {e}", path.display()))?;
            tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());
            Ok(vars)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No variable file at {}, starting empty", path.display());
            Ok(Bindings::new())
        }
        Err(e) => Err(format!("failed to read {}: {e}", path.display()).into()),
    }
}

/// Writes the variables to `path` as pretty-printed JSON.
pub fn save(path: &Path, vars: &Bindings) -> Result<(), Box<dyn std::error::Error>> {
    let json = vars.to_json()?;
    std::fs::write(path, json).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    tracing::debug!("Saved {} variables to {}", vars.len(), path.display());
    Ok(())
}
