use crate::chat::ChatMessageType;
use crate::game_data::ItemId;
use crate::host::WorldPoint;

/// Raw notifications delivered by the host, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// An interface group finished loading
    WidgetLoaded { group_id: i32 },
    ChatMessage {
        kind: ChatMessageType,
        message: String,
    },
    /// Some game-state integer changed. The event carries no payload;
    /// handlers read the values they care about from the client.
    VarbitChanged,
    ItemSpawned {
        item_id: ItemId,
        position: WorldPoint,
    },
    /// A right-click menu entry was appended
    MenuEntryAdded { option: String, target: String },
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::WidgetLoaded { .. } => EventKind::WidgetLoaded,
            HostEvent::ChatMessage { .. } => EventKind::ChatMessage,
            HostEvent::VarbitChanged => EventKind::VarbitChanged,
            HostEvent::ItemSpawned { .. } => EventKind::ItemSpawned,
            HostEvent::MenuEntryAdded { .. } => EventKind::MenuEntryAdded,
        }
    }
}

/// Discriminant of [`HostEvent`], used as the registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    WidgetLoaded,
    ChatMessage,
    VarbitChanged,
    ItemSpawned,
    MenuEntryAdded,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::WidgetLoaded,
        EventKind::ChatMessage,
        EventKind::VarbitChanged,
        EventKind::ItemSpawned,
        EventKind::MenuEntryAdded,
    ];
}
