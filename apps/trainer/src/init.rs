use std::path::Path;

use anyhow::{anyhow, Result};
use srs_core::{CardMap, StateStore};

use crate::store::JsonFileStore;

/// Initializes a new empty card box file.
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(anyhow!(
            "File {:?} already exists! Use `srs-trainer rate` to review cards. Aborting.",
            path
        ));
    }
    JsonFileStore::new(path).save(&CardMap::new())?;
    println!("Created new card box {:?}", path);
    Ok(())
}
