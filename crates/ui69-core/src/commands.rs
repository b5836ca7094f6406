//! Command workflows behind `add` and `list`

use crate::error::Result;
use crate::installer::{install_component, CopyResult};
use crate::output;
use crate::product::ProductConfig;
use crate::registry::Registry;
use crate::selection::Selector;
use std::path::{Path, PathBuf};

/// Arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Component key; `None` launches the selector
    pub component: Option<String>,

    /// Local directory to use for component sources instead of the bundled one
    pub template_dir: Option<PathBuf>,
}

/// Install one component, or every component the user picks
///
/// Components are installed in selection order. The first failure aborts the
/// remaining installs.
pub async fn add<C, S>(
    config: &C,
    args: &AddArgs,
    target_dir: &Path,
    selector: &mut S,
) -> Result<Vec<CopyResult>>
where
    C: ProductConfig,
    S: Selector,
{
    let template_dir = args.template_dir.as_deref();

    if let Some(key) = &args.component {
        return install_by_key(config, key, template_dir, target_dir).await;
    }

    let registry = Registry::load(config, template_dir)?;
    output::splash(config);
    let selection = selector.select(&registry)?;

    let mut copied = Vec::new();
    for key in selection.keys() {
        copied.extend(install_by_key(config, key, template_dir, target_dir).await?);
    }

    Ok(copied)
}

async fn install_by_key<C: ProductConfig>(
    config: &C,
    key: &str,
    template_dir: Option<&Path>,
    target_dir: &Path,
) -> Result<Vec<CopyResult>> {
    let registry = Registry::load(config, template_dir)?;
    let entry = registry.lookup(key)?;
    install_component(entry, target_dir).await
}

/// Print every registry entry
pub fn list<C: ProductConfig>(config: &C, template_dir: Option<&Path>) -> Result<()> {
    let registry = Registry::load(config, template_dir)?;
    output::print_list(config, &registry);
    Ok(())
}
