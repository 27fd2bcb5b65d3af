use std::collections::BTreeMap;

use super::line;
use crate::error::OperationError;
use crate::table::TableInfo;

/// Which relationships to embed in returned rows.
///
/// Scalar columns are always selected in full so rows decode into their
/// entity type. Relationships are opt-in, by field name, with dotted paths
/// for nesting (`transactions.transaction_on_chain_attempts`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    relationships: BTreeMap<&'static str, Self>,
}

impl Selection {
    /// Embed the relationship at `path`, resolved against `table`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::UnknownRelationship`] when a path segment is
    /// not a relationship of the table it is resolved against.
    pub fn include(&mut self, table: &'static TableInfo, path: &str) -> Result<(), OperationError> {
        let (head, rest) = path
            .split_once('.')
            .map_or((path, None), |(head, rest)| (head, Some(rest)));
        let relationship =
            table
                .relationship(head)
                .ok_or_else(|| OperationError::UnknownRelationship {
                    table: table.name,
                    name: head.to_string(),
                })?;
        let child = self.relationships.entry(relationship.name).or_default();
        if let Some(rest) = rest {
            child.include((relationship.target)(), rest)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Relationship fields directly embedded, in name order.
    pub fn relationships(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.relationships.keys().copied()
    }

    pub(super) fn write_rows(&self, table: &TableInfo, out: &mut String, depth: usize) {
        for column in table.columns {
            line(out, depth, column.name);
        }
        for (name, child) in &self.relationships {
            let Some(relationship) = table.relationship(name) else {
                continue;
            };
            line(out, depth, &format!("{name} {{"));
            child.write_rows((relationship.target)(), out, depth + 1);
            line(out, depth, "}");
            if let Some(aggregate) = relationship.aggregate_field {
                line(out, depth, &format!("{aggregate} {{ aggregate {{ count }} }}"));
            }
        }
    }
}
