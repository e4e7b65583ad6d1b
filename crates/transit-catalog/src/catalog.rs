//! The validated route collection.

use rustc_hash::FxHashMap;

use transit_core::{RouteId, RouteIndex, RouteKind};

use crate::{CatalogError, CatalogResult, RouteDefinition};

/// An ordered, validated set of routes with an id index.
///
/// Catalog order is significant: each route's [`RouteIndex`] is its position
/// here, and per-route RNG streams are keyed on that index.
#[derive(Clone, Debug, Default)]
pub struct RouteCatalog {
    routes: Vec<RouteDefinition>,
    by_id:  FxHashMap<RouteId, RouteIndex>,
}

impl RouteCatalog {
    /// Validate every route and build the id index.
    ///
    /// Fails on the first route that breaks an integrity rule or repeats an
    /// earlier id.
    pub fn new(routes: Vec<RouteDefinition>) -> CatalogResult<Self> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(routes.len());

        for (i, route) in routes.iter().enumerate() {
            route.validate()?;
            let index = RouteIndex::try_from(i)
                .map_err(|_| CatalogError::Parse(format!("too many routes ({})", routes.len())))?;
            if by_id.insert(route.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateRoute(route.id.clone()));
            }
        }

        log::debug!("route catalog built with {} route(s)", routes.len());
        Ok(Self { routes, by_id })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All routes in catalog order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Routes paired with their catalog index.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (RouteIndex, &RouteDefinition)> {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| (RouteIndex(i as u32), r))
    }

    pub fn get(&self, id: &str) -> Option<&RouteDefinition> {
        self.index_of(id).map(|i| &self.routes[i.index()])
    }

    pub fn index_of(&self, id: &str) -> Option<RouteIndex> {
        self.by_id.get(id).copied()
    }

    pub fn by_index(&self, index: RouteIndex) -> Option<&RouteDefinition> {
        self.routes.get(index.index())
    }

    /// Routes of one service class, in catalog order.
    pub fn by_kind(&self, kind: RouteKind) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter().filter(move |r| r.kind == kind)
    }

    /// Consume the catalog, returning the routes in order.
    pub fn into_routes(self) -> Vec<RouteDefinition> {
        self.routes
    }
}
