use crate::entity::record::{Property, PropertyValue};
use smallvec::SmallVec;

/// Assemble the canonical identifier fragment for an entity from its declared
/// key names and already-built properties.
///
/// Deterministic and stable over the DECLARED key order, never a map
/// iteration order. Keys whose property is missing or null are skipped;
/// returns `None` when nothing resolves. A single declared key renders as
/// `(<literal>)`, composite declarations as `(<name>=<literal>,...)` over
/// the resolved subset.
pub fn format_entity_id(keys: &[&str], properties: &[Property]) -> Option<String> {
    let mut resolved: SmallVec<[(&str, String); 2]> = SmallVec::new();
    for key in keys {
        let Some(property) = properties.iter().find(|p| p.name == *key) else {
            continue;
        };
        let literal = match &property.value {
            PropertyValue::Primitive(value) => value.literal(),
            PropertyValue::Enum(ordinal) => ordinal.to_string(),
            // Null and structured values cannot key an entity.
            _ => continue,
        };
        resolved.push((key, literal));
    }

    if resolved.is_empty() {
        return None;
    }
    if keys.len() == 1 {
        return Some(format!("({})", resolved[0].1));
    }
    let joined = resolved
        .iter()
        .map(|(name, literal)| format!("{name}={literal}"))
        .collect::<Vec<_>>()
        .join(",");
    Some(format!("({joined})"))
}
