use crate::state::types::EffectId;

const ITEM_MARKER: &str = "Item";

/// An active effect on an actor, usually granted by one of its items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActiveEffect {
    pub id: EffectId,
    pub label: String,
    /// Host UUID of the document that granted the effect, e.g.
    /// `Actor.abc.Item.def`.
    pub origin: Option<String>,
    pub suppressed: bool,
}

impl ActiveEffect {
    pub fn new(id: impl Into<EffectId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Item id embedded in the origin: whatever follows the last `Item`
    /// segment and its separator. An origin without an `Item` segment is
    /// taken as the id itself.
    pub fn origin_item_id(&self) -> Option<&str> {
        let origin = self.origin.as_deref()?;
        let Some(index) = origin.rfind(ITEM_MARKER) else {
            return Some(origin);
        };
        let mut rest = origin[index + ITEM_MARKER.len()..].chars();
        rest.next()?;
        Some(rest.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_follows_last_item_segment() {
        let effect = ActiveEffect::new("e1", "Vacc Suit").with_origin("Actor.a1.Item.i9");
        assert_eq!(effect.origin_item_id(), Some("i9"));

        let nested = ActiveEffect::new("e2", "Nested").with_origin("Item.x.Item.y");
        assert_eq!(nested.origin_item_id(), Some("y"));
    }

    #[test]
    fn bare_origin_is_the_item_id() {
        let effect = ActiveEffect::new("e1", "Loose").with_origin("i9");
        assert_eq!(effect.origin_item_id(), Some("i9"));
        assert_eq!(ActiveEffect::new("e2", "None").origin_item_id(), None);
    }
}
