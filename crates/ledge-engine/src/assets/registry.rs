use std::collections::HashMap;

use crate::api::types::AtlasId;
use crate::assets::manifest::LevelManifest;
use crate::components::descriptor::EntityDescriptor;
use crate::core::level::LevelError;

/// Registry of entity kinds, built from a level manifest.
/// Game code looks up a descriptor by name and hands it to `spawn`.
#[derive(Debug)]
pub struct EntityRegistry {
    descriptors: HashMap<String, EntityDescriptor>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Build a registry from a parsed manifest, resolving each entry's
    /// atlas name to its index. Tuning numbers the manifest omits keep
    /// the engine defaults.
    pub fn from_manifest(manifest: &LevelManifest) -> Result<Self, LevelError> {
        let mut descriptors = HashMap::with_capacity(manifest.entities.len());
        for (name, entry) in &manifest.entities {
            let position = manifest
                .atlases
                .iter()
                .position(|a| a.name == entry.atlas)
                .ok_or_else(|| LevelError::UnknownEntityAtlas {
                    entity: name.clone(),
                    name: entry.atlas.clone(),
                })?;

            let mut descriptor = EntityDescriptor::default()
                .with_name(name.clone())
                .with_size(entry.width, entry.height)
                .with_atlas(AtlasId(position as u32))
                .with_animations(entry.animations.clone())
                .with_control(entry.control);

            if let Some(mass) = entry.mass {
                descriptor.mass = mass;
            }
            if let Some(slipperiness) = entry.slipperiness {
                descriptor.slipperiness = slipperiness;
            }
            if let Some(walk_accel) = entry.walk_accel {
                descriptor.walk_accel = walk_accel;
            }
            if let Some(run_boost) = entry.run_boost {
                descriptor.run_boost = run_boost;
            }
            if let Some(max_x_velocity) = entry.max_x_velocity {
                descriptor.max_x_velocity = max_x_velocity;
            }
            if let Some(max_y_velocity) = entry.max_y_velocity {
                descriptor.max_y_velocity = max_y_velocity;
            }
            if let Some(jump_force) = entry.jump_force {
                descriptor.jump_force = jump_force;
            }
            if let Some(jump_kick) = entry.jump_kick {
                descriptor.jump_kick = jump_kick;
            }
            if let Some(jump_control) = entry.jump_control {
                descriptor.jump_control = jump_control;
            }
            if let Some(run_jump_scale) = entry.run_jump_scale {
                descriptor.run_jump_scale = run_jump_scale;
            }
            if let Some(attack_reach) = entry.attack_reach {
                descriptor.attack_reach = attack_reach;
            }
            if let Some(attack_frames) = entry.attack_frames {
                descriptor.attack_frames = attack_frames;
            }

            descriptors.insert(name.clone(), descriptor);
        }
        Ok(Self { descriptors })
    }

    /// Look up an entity kind by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&EntityDescriptor> {
        self.descriptors.get(name)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::descriptor::ControlPolicy;

    const MANIFEST: &str = r#"{
        "name": "pit",
        "tile_size": 32,
        "physics": { "gravity": 10.0, "friction": -0.22 },
        "atlases": [
            { "name": "tiles", "cols": 5, "rows": 5, "path": "tiles.png" },
            { "name": "hero", "cols": 8, "rows": 6, "path": "hero.png" }
        ],
        "layers": [ { "atlas": "tiles", "mapping": "fg.csv" } ],
        "entities": {
            "hero": {
                "atlas": "hero",
                "width": 64,
                "height": 64,
                "mass": 1.3,
                "jump_force": 70,
                "control": "player",
                "animations": { "idle": { "row": 0, "frames": 4, "rate": 0.2 } }
            }
        }
    }"#;

    #[test]
    fn builds_descriptors_with_defaults_filled_in() {
        let manifest = LevelManifest::from_json(MANIFEST).unwrap();
        let registry = EntityRegistry::from_manifest(&manifest).unwrap();
        assert_eq!(registry.len(), 1);

        let hero = registry.get("hero").expect("hero should exist");
        assert_eq!(hero.name, "hero");
        assert_eq!(hero.atlas, AtlasId(1));
        assert_eq!(hero.control, ControlPolicy::Player);
        // Overridden values.
        assert_eq!(hero.mass, 1.3);
        assert_eq!(hero.jump_force, 70.0);
        // Omitted values keep the engine defaults.
        let default = EntityDescriptor::default();
        assert_eq!(hero.jump_kick, default.jump_kick);
        assert_eq!(hero.max_x_velocity, default.max_x_velocity);
    }

    #[test]
    fn unknown_atlas_names_the_entity() {
        let json = MANIFEST.replace("\"atlas\": \"hero\"", "\"atlas\": \"ghost\"");
        let manifest = LevelManifest::from_json(&json).unwrap();
        let err = EntityRegistry::from_manifest(&manifest).unwrap_err();
        match err {
            LevelError::UnknownEntityAtlas { entity, name } => {
                assert_eq!(entity, "hero");
                assert_eq!(name, "ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_kind_returns_none() {
        let registry = EntityRegistry::new();
        assert!(registry.get("nonexistent").is_none());
    }
}
