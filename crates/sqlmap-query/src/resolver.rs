//! Naming override hook for the mapping layer
//!
//! The mapping layer asks a [`Resolver`] before it derives schema, table,
//! column and join-table names from an entity's declared mapping. Every
//! method returns `None` by default, meaning "no override".
//!
//! Nothing in this crate calls the resolver; expressions and orderings only
//! carry property paths, which the mapping layer translates with it.

/// Application hook overriding mapped names
pub trait Resolver: Send + Sync {
    /// Schema for the given entity type
    fn schema_name(&self, _entity: &str) -> Option<String> {
        None
    }

    /// Table for the given entity type
    fn table_name(&self, _entity: &str) -> Option<String> {
        None
    }

    /// Column backing `property` on the given entity type
    fn column_name(&self, _entity: &str, _property: &str) -> Option<String> {
        None
    }

    /// Join table backing a many-to-many `property`
    fn join_table(&self, _entity: &str, _property: &str) -> Option<String> {
        None
    }
}

/// Resolver that never overrides anything
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultResolver;

impl Resolver for DefaultResolver {}
