//! Allow-list — the fixed set of entity ids the gateway may expose.

/// Scene ids the gateway exposes, in presentation order.
const SCENE_IDS: [&str; 5] = [
    "scene.uit",
    "scene.ochtend",
    "scene.middag",
    "scene.avond",
    "scene.nacht",
];

/// Switch ids the gateway exposes, in presentation order.
const SWITCH_IDS: [&str; 3] = [
    "switch.elektrische_deken",
    "switch.mechanische_ventilatie",
    "switch.tv_meubel",
];

/// Immutable allow-list of scene and switch ids.
///
/// Constructed once at startup and shared read-only across requests.
/// Membership is the only gate between an inbound request and an upstream
/// hub call; list order doubles as presentation order.
#[derive(Debug, Clone)]
pub struct AllowList {
    scenes: Vec<String>,
    switches: Vec<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(
            SCENE_IDS.map(String::from).to_vec(),
            SWITCH_IDS.map(String::from).to_vec(),
        )
    }
}

impl AllowList {
    /// Build an allow-list from explicit id sets.
    #[must_use]
    pub fn new(scenes: Vec<String>, switches: Vec<String>) -> Self {
        Self { scenes, switches }
    }

    /// Whether `id` is an exposed scene.
    #[must_use]
    pub fn allows_scene(&self, id: &str) -> bool {
        self.scene_position(id).is_some()
    }

    /// Whether `id` is an exposed switch.
    #[must_use]
    pub fn allows_switch(&self, id: &str) -> bool {
        self.switch_position(id).is_some()
    }

    /// Position of `id` in the scene list, if present.
    #[must_use]
    pub fn scene_position(&self, id: &str) -> Option<usize> {
        self.scenes.iter().position(|scene| scene == id)
    }

    /// Position of `id` in the switch list, if present.
    #[must_use]
    pub fn switch_position(&self, id: &str) -> Option<usize> {
        self.switches.iter().position(|switch| switch == id)
    }
}
