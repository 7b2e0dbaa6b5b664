use simd_json::{OwnedValue, StaticNode};

/// Per-value transform applied while decoding, in the JSON.parse reviver
/// style: called with each member key and its parsed value, children before
/// parents, array indices as decimal strings, and finally the whole line's
/// value under the empty key. Returning `None` removes an object member,
/// nulls out an array element, and nulls the line's value.
pub type Reviver = Box<dyn Fn(&str, OwnedValue) -> Option<OwnedValue> + Send + Sync>;

/// Runs `reviver` over a parsed value.
pub fn revive(value: OwnedValue, reviver: &Reviver) -> OwnedValue {
    walk("", value, reviver).unwrap_or(OwnedValue::Static(StaticNode::Null))
}

fn walk(key: &str, value: OwnedValue, reviver: &Reviver) -> Option<OwnedValue> {
    let value = match value {
        OwnedValue::Array(items) => {
            let items = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    walk(&index.to_string(), item, reviver)
                        .unwrap_or(OwnedValue::Static(StaticNode::Null))
                })
                .collect();
            OwnedValue::Array(items)
        }
        OwnedValue::Object(members) => {
            let members = *members;
            let mut out = simd_json::owned::Object::with_capacity(members.len());
            for (name, member) in members.into_iter() {
                if let Some(member) = walk(&name, member, reviver) {
                    out.insert(name, member);
                }
            }
            OwnedValue::Object(Box::new(out))
        }
        other => other,
    };
    reviver(key, value)
}
