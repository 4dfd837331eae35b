//! Pre-flight checks for the demo binary
//!
//! `dladdr` can only name functions an executable exports. Before printing a
//! backtrace, inspect the running executable and say so when every line is
//! going to read `???`.

use anyhow::{bail, Context, Result};
use object::{Object, ObjectSection, ObjectSymbol, SymbolKind};
use std::path::Path;

/// What an executable offers the dynamic loader for symbolization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutableSymbols {
    /// Functions defined in the executable and present in `.dynsym`
    pub exported_functions: usize,
    /// Whether a static `.symtab` survives (useful to debuggers, not to `dladdr`)
    pub has_symtab: bool,
}

/// Run all pre-flight checks against the running executable.
pub fn run_preflight_checks(quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    check_exported_symbols(&exe)
}

/// Warn when `path` exports no functions to the dynamic loader.
fn check_exported_symbols(path: &Path) -> Result<()> {
    let Some(symbols) = inspect_executable(path)? else {
        // Not an object file we understand; symbolization decides for itself
        return Ok(());
    };

    if symbols.exported_functions == 0 {
        eprintln!(
            "warning: {} exports no functions, frames inside it will print as ???\n\
             (link with -C link-arg=-rdynamic to export them)",
            path.display()
        );
    } else if !symbols.has_symtab {
        log::debug!("{} is stripped, exported names only", path.display());
    }

    Ok(())
}

/// Count the functions `path` exports. `None` if it is not a parsable object.
pub fn inspect_executable(path: &Path) -> Result<Option<ExecutableSymbols>> {
    if !path.is_file() {
        bail!(
            "Binary not found: {}\n\n\
             Make sure the path is correct and the binary exists.",
            path.display()
        );
    }

    let file_data =
        std::fs::read(path).with_context(|| format!("Failed to read binary: {}", path.display()))?;

    let Ok(obj) = object::File::parse(&*file_data) else {
        return Ok(None);
    };

    let exported_functions = obj
        .dynamic_symbols()
        .filter(|sym| sym.is_definition() && sym.kind() == SymbolKind::Text)
        .count();
    let has_symtab = obj.section_by_name(".symtab").is_some_and(|s| s.size() > 0);

    Ok(Some(ExecutableSymbols { exported_functions, has_symtab }))
}
