//! Item-granted active effects.

use crate::state::{Actor, ItemStatus};

/// Suppresses every effect whose originating item is not equipped, and
/// re-enables those whose item is. Effects without an origin, or whose item
/// the actor no longer owns, are left alone.
///
/// Returns the number of effects whose flag changed.
pub fn refresh_suppression(actor: &mut Actor) -> usize {
    let Actor { items, effects, .. } = actor;
    let mut changed = 0;

    for effect in effects.iter_mut() {
        let Some(item_id) = effect.origin_item_id() else {
            continue;
        };
        let Some(item) = items.iter().find(|item| item.id.as_str() == item_id) else {
            continue;
        };

        let suppressed = item.status != ItemStatus::Equipped;
        if effect.suppressed != suppressed {
            effect.suppressed = suppressed;
            changed += 1;
        }
    }

    changed
}
