//! Headless play-through of the bundled dungeon level.
//!
//! Runs a scripted input sequence through a session for a few hundred
//! frames and logs what the hero is doing. Pass a manifest path as the
//! first argument to play a different level.

use std::env;
use std::error::Error;
use std::path::Path;

use glam::Vec2;
use ledge_engine::{
    load_level, parse_blueprint, EntityRegistry, InputEvent, Level, LevelManifest, Session,
    SessionConfig,
};

// Browser keyCode values matching the default bindings.
const LEFT: u32 = 37;
const RIGHT: u32 = 39;
const JUMP: u32 = 32;
const RUN: u32 = 16;
const ATTACK: u32 = 88;
const ESCAPE: u32 = 27;

fn embedded_level() -> Result<(Level, EntityRegistry), Box<dyn Error>> {
    let manifest = LevelManifest::from_json(include_str!("../assets/level.json"))?;
    let blueprints = vec![
        parse_blueprint(include_str!("../assets/backdrop.csv"))?,
        parse_blueprint(include_str!("../assets/foreground.csv"))?,
    ];
    let level = Level::build(&manifest, &blueprints)?;
    let registry = EntityRegistry::from_manifest(&manifest)?;
    Ok((level, registry))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (level, registry) = match env::args().nth(1) {
        Some(path) => load_level(Path::new(&path))?,
        None => embedded_level()?,
    };

    let kill_plane = level.pixel_height() + 300.0;
    let mut session = Session::new(
        level,
        SessionConfig {
            kill_plane: Some(kill_plane),
            ..Default::default()
        },
    );

    let hero_kind = registry.get("hero").ok_or("level defines no hero entity")?;
    let hero = session.spawn(hero_kind.clone(), Vec2::new(96.0, 384.0))?;
    session.follow(hero);
    if let Some(lurker) = registry.get("lurker") {
        session.spawn(lurker.clone(), Vec2::new(480.0, 384.0))?;
    }

    // Run right, jump into the platform, attack, walk back, then quit.
    let script: &[(u32, InputEvent)] = &[
        (5, InputEvent::KeyDown { key_code: RIGHT }),
        (40, InputEvent::KeyDown { key_code: RUN }),
        (90, InputEvent::KeyDown { key_code: JUMP }),
        (100, InputEvent::KeyUp { key_code: JUMP }),
        (150, InputEvent::KeyDown { key_code: ATTACK }),
        (160, InputEvent::KeyUp { key_code: ATTACK }),
        (200, InputEvent::KeyUp { key_code: RUN }),
        (260, InputEvent::KeyUp { key_code: RIGHT }),
        (300, InputEvent::KeyDown { key_code: LEFT }),
        (420, InputEvent::KeyUp { key_code: LEFT }),
        (460, InputEvent::KeyDown { key_code: ESCAPE }),
    ];

    for frame in 0..600u32 {
        for (at, event) in script {
            if *at == frame {
                session.push_input(*event);
            }
        }

        // Hosts with a real clock feed wall time through `advance`;
        // this demo paces itself one frame at a time.
        session.step(1.0);

        if frame % 60 == 0 {
            let view = session.frame_view();
            if let Some(entity) = session.scene.get(hero) {
                log::info!(
                    "frame {frame}: hero at ({:.0}, {:.0}) vel ({:.2}, {:.2}) {:?}, {} tiles {} sprites",
                    entity.position.x,
                    entity.position.y,
                    entity.velocity.x,
                    entity.velocity.y,
                    entity.animation.state,
                    view.tiles.len(),
                    view.sprites.len(),
                );
            }
        }
        if session.quit_requested() {
            log::info!("quit requested at frame {frame}");
            break;
        }
    }
    Ok(())
}
