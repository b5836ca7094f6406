//! Charm-style component selector using cliclack

use crate::error::{Result, ScaffoldError};
use crate::registry::Registry;
use crate::selection::{prompt_until_selected, Selection, Selector};
use std::io;

/// Interactive multi-select over the registry's display names
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackSelector;

impl Selector for ClackSelector {
    fn select(&mut self, registry: &Registry) -> Result<Selection> {
        cliclack::intro("Which components would you like to add?").map_err(prompt_error)?;

        let selection = prompt_until_selected(
            || {
                let mut multi = cliclack::multiselect(
                    "Select components using space, then press Enter to confirm",
                );
                for entry in registry.entries() {
                    multi = multi.item(entry.key.clone(), &entry.name, &entry.description);
                }
                multi.required(false).interact().map_err(prompt_error)
            },
            |message| cliclack::log::warning(message).map_err(prompt_error),
        )?;

        cliclack::outro(format!(
            "{} component{} selected",
            selection.len(),
            if selection.len() == 1 { "" } else { "s" }
        ))
        .map_err(prompt_error)?;

        Ok(selection)
    }
}

/// Ctrl+C and Esc surface as `Interrupted`
fn prompt_error(err: io::Error) -> ScaffoldError {
    if err.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::SelectorCancelled
    } else {
        ScaffoldError::Prompt(err)
    }
}
