use std::fmt;

/// Namespace for the gradient/filter/pattern ids of one scene instance.
///
/// Two scenes rendered into the same document (or the same process) never share ids as long as
/// their `(composition, instance)` pairs differ. The composition id is kept verbatim when it is
/// ASCII alphanumeric; every other byte is written as `_xx` (lowercase hex), so distinct ids never
/// map to the same prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ResourceScope {
    prefix: String,
}

impl ResourceScope {
    /// Scope for instance `instance` of composition `composition_id`.
    pub fn new(composition_id: &str, instance: u32) -> Self {
        let mut slug = String::with_capacity(composition_id.len());
        for b in composition_id.bytes() {
            if b.is_ascii_alphanumeric() {
                slug.push(char::from(b));
            } else {
                slug.push_str(&format!("_{b:02x}"));
            }
        }
        // `_` alone is never produced by escaping.
        if slug.is_empty() {
            slug.push('_');
        }
        Self {
            prefix: format!("{slug}-{instance}"),
        }
    }

    /// The id prefix, e.g. `OnlineIcon-0`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Scoped id for the layer-local resource name `local`.
    pub fn id(&self, local: &str) -> ResourceId {
        ResourceId(format!("{}-{local}", self.prefix))
    }
}

/// Fully qualified resource id, referenced as `url(#id)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ResourceId(String);

impl ResourceId {
    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
