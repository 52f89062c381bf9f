use std::path::Path;

use simple_ls_domain::{
    Configuration, Listing, RenderMode, ResolvedEntry, analytics::SortSpec, filter::visible_entries,
};
use simple_ls_ports::filesystem::{DirectoryReader, EnumerationOrder, MetadataResolver};
use simple_ls_shared_kernel::{ApplicationError, EntryName, InfrastructureError, Result};

use crate::dto::ListingOutput;

/// Lists one directory: enumerate, filter, resolve metadata when needed, sort, shape.
pub struct ListDirectory<'a> {
    reader: &'a dyn DirectoryReader,
    resolver: &'a dyn MetadataResolver,
}

impl<'a> ListDirectory<'a> {
    pub fn new(reader: &'a dyn DirectoryReader, resolver: &'a dyn MetadataResolver) -> Self {
        Self { reader, resolver }
    }

    /// Fails only when the directory itself cannot be read or the entry
    /// buffer cannot be allocated. A single entry whose `stat` fails is
    /// skipped and reported in [`ListingOutput::skipped`].
    pub fn run(&self, config: &Configuration) -> Result<ListingOutput> {
        let order = if config.sort.requires_alphabetical_enumeration() {
            EnumerationOrder::Alphabetical
        } else {
            EnumerationOrder::Native
        };

        let names = self.reader.read_entries(&config.directory, order)?;
        let visible = visible_entries(names, config.hidden);
        log::debug!("{} entries visible under {:?}", visible.len(), config.hidden);

        if !config.needs_metadata() {
            return Ok(ListingOutput { listing: Listing::Short(visible), skipped: Vec::new() });
        }

        let (mut resolved, skipped) = self.resolve_all(&config.directory, visible)?;

        if let Some(spec) = SortSpec::for_mode(config.sort) {
            spec.apply(&mut resolved);
        }

        let listing = match config.render_mode() {
            RenderMode::Short => Listing::Short(resolved.into_iter().map(|entry| entry.name).collect()),
            RenderMode::Long => Listing::Long(resolved),
            RenderMode::SizeTable => Listing::SizeTable(resolved),
        };
        Ok(ListingOutput { listing, skipped })
    }

    /// One `stat` per entry; the sort then works on these memoized results.
    fn resolve_all(
        &self,
        directory: &Path,
        names: Vec<EntryName>,
    ) -> Result<(Vec<ResolvedEntry>, Vec<InfrastructureError>)> {
        let mut resolved = Vec::new();
        resolved
            .try_reserve_exact(names.len())
            .map_err(|source| ApplicationError::Allocation { requested: names.len(), source })?;

        let mut skipped = Vec::new();
        for name in names {
            match self.resolver.resolve(directory, &name) {
                Ok(metadata) => resolved.push(ResolvedEntry::new(name, metadata)),
                Err(err) => {
                    log::debug!("skipping '{name}': {err}");
                    skipped.push(err);
                }
            }
        }
        Ok((resolved, skipped))
    }
}
