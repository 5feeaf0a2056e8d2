use phf::phf_map;

pub type ItemId = i32;

// not exhaustive, only the minigame items we react to
pub mod item_id {
    use super::ItemId;

    pub const CRACKERS: ItemId = 10513;
    pub const TOFU: ItemId = 10514;
    pub const WORMS: ItemId = 10515;
    pub const GREEN_EGG: ItemId = 10531;
    pub const RED_EGG: ItemId = 10532;
    pub const BLUE_EGG: ItemId = 10533;
    pub const YELLOW_EGG: ItemId = 10534;
    pub const POISONED_TOFU: ItemId = 10539;
    pub const POISONED_WORMS: ItemId = 10540;
    pub const POISONED_MEAT: ItemId = 10541;
}

/// Text shown in the healer/defender "listen" widgets, keyed to the item it asks for
static LISTEN_ITEMS: phf::Map<&'static str, ItemId> = phf_map! {
    "Tofu" => item_id::TOFU,
    "Crackers" => item_id::CRACKERS,
    "Worms" => item_id::WORMS,
    "Pois. Worms" => item_id::POISONED_WORMS,
    "Pois. Tofu" => item_id::POISONED_TOFU,
    "Pois. Meat" => item_id::POISONED_MEAT,
};

/// Item requested by a listen call, if the text is one we know
pub fn listen_item_id(call: &str) -> Option<ItemId> {
    LISTEN_ITEMS.get(call).copied()
}

pub fn is_egg(item: ItemId) -> bool {
    matches!(
        item,
        item_id::RED_EGG | item_id::GREEN_EGG | item_id::BLUE_EGG | item_id::YELLOW_EGG
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_calls_resolve_to_items() {
        assert_eq!(listen_item_id("Pois. Meat"), Some(item_id::POISONED_MEAT));
        assert_eq!(listen_item_id("Crackers"), Some(item_id::CRACKERS));
        assert_eq!(listen_item_id("crackers"), None);
        assert_eq!(listen_item_id(""), None);
    }

    #[test]
    fn only_colored_eggs_are_eggs() {
        assert!(is_egg(item_id::YELLOW_EGG));
        assert!(is_egg(item_id::GREEN_EGG));
        assert!(!is_egg(item_id::TOFU));
        assert!(!is_egg(10535)); // poisoned egg
    }
}
