use log::{info, warn};

use crate::core::error::WorldError;
use crate::core::math::WorldPosition;
use crate::domain::Tile;
use crate::spatial::chunks::ShiftEvents;

use super::{GameScreen, WorldCore};

pub(super) fn start(world: &mut WorldCore) {
    match world.screen {
        GameScreen::Start => {
            world.screen = GameScreen::Playing;
            info!("world: playing from frame {}", world.frame);
        }
        GameScreen::GameOver => {
            super::init::reset_world_core(world);
            world.screen = GameScreen::Playing;
            info!("world: restarted after game over");
        }
        GameScreen::Playing => {}
    }
}

pub(super) fn toggle_pause(world: &mut WorldCore) {
    world.screen = match world.screen {
        GameScreen::Playing => GameScreen::Start,
        GameScreen::Start => GameScreen::Playing,
        GameScreen::GameOver => GameScreen::GameOver,
    };
}

pub(super) fn place_obstacle(world: &mut WorldCore, position: WorldPosition) -> Result<(), WorldError> {
    world.window.set_tile(position, Tile::Solid).map_err(|err| {
        warn!("world: obstacle at ({:.2}, {:.2}) rejected: {err}", position.x, position.y);
        err
    })
}

pub(super) fn teleport_observer(world: &mut WorldCore, position: WorldPosition) -> ShiftEvents {
    if !position.is_finite() {
        warn!("world: ignoring non-finite teleport target");
        return ShiftEvents::new();
    }
    world.observer.position = position;
    world.window.on_observer_moved(position, &mut world.store)
}

pub(super) fn spawn_agent(world: &mut WorldCore, position: WorldPosition) -> Option<usize> {
    if !position.is_finite() {
        return None;
    }
    world.swarm.spawn_at(position)
}
