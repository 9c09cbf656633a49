//! Run driver for sls.
//!
//! Inspects the target once: a directory is listed and rendered as a decorated table,
//! anything else becomes a single plain line. All lines are built before anything is
//! written, so a fatal error never leaves a half printed table behind.

use crate::config::{IconSet, Options};
use crate::core::{Error, Result, extract, list_dir};
use crate::ui::{IconResolver, render_single, render_table};

use tracing::debug;

use std::fs;
use std::io::Write;

/// Runs sls for `options`, loading icons from the default location.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<()> {
    run_with(options, IconSet::load, out)
}

/// Runs sls with a custom icon loader. The loader is only called for directory targets.
pub fn run_with<W, F>(options: &Options, load_icons: F, out: &mut W) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<IconSet>,
{
    let lines = render_target(options, load_icons)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Produces every output line for the target without writing anything.
pub fn render_target<F>(options: &Options, load_icons: F) -> Result<Vec<String>>
where
    F: FnOnce() -> Result<IconSet>,
{
    let target = options.path.as_path();
    let md = fs::metadata(target).map_err(|e| Error::from_io(target, e))?;

    if md.is_dir() {
        let icons = load_icons()?;
        let records = list_dir(target, options.show_hidden, options.size_mode())?;
        debug!(path = %target.display(), count = records.len(), "listed directory");
        Ok(render_table(&records, &IconResolver::new(&icons)))
    } else {
        let record = extract(target, options.size_mode())?;
        Ok(vec![render_single(&record)])
    }
}
