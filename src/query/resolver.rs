use tracing::trace;
use crate::core::types::RecordId;
use crate::index::posting::intersect;
use crate::query::path::LeafPath;

/// AND together the lookups of every leaf path.
///
/// No paths means no predicate, which matches nothing. Once the running set is
/// empty the remaining paths are not looked up.
pub fn resolve_all<F>(paths: &[LeafPath], mut lookup: F) -> Vec<RecordId>
where
    F: FnMut(&LeafPath) -> Vec<RecordId>,
{
    let mut remaining = paths.iter();
    let Some(first) = remaining.next() else {
        return Vec::new();
    };

    let mut result = lookup(first);
    for path in remaining {
        if result.is_empty() {
            break;
        }
        let next = lookup(path);
        trace!(
            path = %path.fields.join("."),
            value = %path.value,
            running = result.len(),
            matched = next.len(),
            "intersecting leaf path"
        );
        result = intersect(&result, &next);
    }
    result
}
