use tablify::{Category, Direction, EventTarget, Table, resolve_header_cell};
use tracing::{Level, debug, info, span, warn};
use vaultify::Vault;

use crate::{
    SortDirective, SortSettings, SortStatePersistence, reorder, resolve_columns, select_direction,
};

/// What a page-load replay did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing usable was stored.
    NoState,
    /// The stored order is the one the server already rendered.
    ServerDefault,
    /// No header declares the stored category.
    NoMatchingColumn(SortDirective),
    /// The matching header refused to sort.
    Declined(SortDirective),
    Applied(SortDirective),
}

pub struct SortEngine<V> {
    settings: SortSettings,
    persistence: SortStatePersistence<V>,
}

impl<V: Vault> SortEngine<V> {
    pub fn new(settings: SortSettings, vault: V) -> Self {
        let persistence = SortStatePersistence::new(vault, settings.storage_key.clone());
        Self {
            settings,
            persistence,
        }
    }

    pub fn settings(&self) -> &SortSettings {
        &self.settings
    }

    pub fn persistence(&self) -> &SortStatePersistence<V> {
        &self.persistence
    }

    /// Handles a user click on the header row and remembers the result.
    pub fn click(&self, table: &mut Table, target: &EventTarget) -> Option<SortDirective> {
        let Some((position, _)) = resolve_header_cell(table, target) else {
            debug!("click did not land on a header cell");
            return None;
        };
        let directive = self.sort_by_header(table, position, None)?;
        if let Err(e) = self.persistence.save(directive) {
            warn!("failed to persist sort state {}: {}", directive, e);
        }
        Some(directive)
    }

    /// Sorts on the header at `position` without touching persisted state.
    ///
    /// `explicit` bypasses the toggle and category defaults.
    pub fn sort_by_header(
        &self,
        table: &mut Table,
        position: usize,
        explicit: Option<Direction>,
    ) -> Option<SortDirective> {
        let span = span!(Level::DEBUG, "sort", position);
        let _enter = span.enter();

        let spec = resolve_columns(table, position, &self.settings.listing_class)?;
        let cell = table.header.get_mut(position)?;
        let direction = select_direction(cell, explicit)?;
        let category = cell.category.unwrap_or(Category::Name);

        reorder(table, spec, direction);
        Some(SortDirective::new(category, direction))
    }

    /// Replays the stored directive on a freshly loaded table.
    pub fn restore(&self, table: &mut Table) -> RestoreOutcome {
        let directive = match self.persistence.load() {
            Ok(Some(directive)) => directive,
            Ok(None) => return RestoreOutcome::NoState,
            Err(e) => {
                warn!("failed to load sort state: {}", e);
                return RestoreOutcome::NoState;
            }
        };

        if directive == self.settings.server_default {
            debug!("stored order {} is already rendered", directive);
            return RestoreOutcome::ServerDefault;
        }

        let Some(position) = table.find_category(directive.category) else {
            debug!("no header for stored category {}", directive.category);
            return RestoreOutcome::NoMatchingColumn(directive);
        };

        match self.sort_by_header(table, position, Some(directive.direction)) {
            Some(applied) => {
                info!("restored sort order {}", applied);
                RestoreOutcome::Applied(applied)
            }
            None => RestoreOutcome::Declined(directive),
        }
    }
}
