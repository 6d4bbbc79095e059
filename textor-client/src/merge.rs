//! Ordered merge of partial result shards
//!
//! A job's result arrives as a sequence of shards: pages from the
//! paginated API, or numbered objects read back from storage. The merge
//! rule is the same for both sources: the first shard provides the
//! scalar fields, every shard contributes its records in order, and the
//! pagination cursor is dropped from the final document.

use serde_json::{Map, Value};

use textor_core::domain::response::ResponseDocument;

/// Field carrying the pagination cursor; meaningless on a merged result.
const NEXT_TOKEN_FIELD: &str = "NextToken";

/// Merge shards in the order given, concatenating the records under
/// `payload_field`.
///
/// The accumulator is built fresh rather than extended in place: scalar
/// fields are copied from the first shard once, record lists are folded
/// into a newly allocated sequence, and the payload field is always
/// present on the output even when every shard omitted it. A shard
/// without the payload field contributes an empty list. Returns `None`
/// for zero shards.
pub fn merge_shards<I>(shards: I, payload_field: &str) -> Option<ResponseDocument>
where
    I: IntoIterator<Item = ResponseDocument>,
{
    let mut scalar_fields: Option<Map<String, Value>> = None;
    let mut records: Vec<Value> = Vec::new();

    for shard in shards {
        let mut shard = shard.into_inner();
        if let Some(Value::Array(items)) = shard.remove(payload_field) {
            records.extend(items);
        }
        if scalar_fields.is_none() {
            scalar_fields = Some(shard);
        }
    }

    let mut merged = scalar_fields?;
    merged.insert(payload_field.to_string(), Value::Array(records));
    merged.remove(NEXT_TOKEN_FIELD);
    Some(merged.into())
}
