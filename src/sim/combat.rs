//! Damage exchange between the player and enemies.

use super::enemy::{Enemy, EnemyState};
use super::player::{Player, PlayerAction, STAMINA_REGEN_TICKS};
use super::Sprite;
use crate::audio::{Cues, Sound};
use crate::defs::SpriteFlags;

pub const SCORE_PER_HIT: i32 = 10;
pub const SCORE_PER_KILL: i32 = 50;
/// Score lost per point of damage taken.
pub const SCORE_PER_DAMAGE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitOutcome {
    pub taken: i32,
    pub blocked: bool,
    pub dead: bool,
}

/// Land an enemy hit of `damage` on the player.
///
/// A raised shield with stamina left halves the damage (rounded down) and
/// costs one stamina point.
pub fn hit_player(player: &mut Player, damage: i32, cues: &mut Cues) -> HitOutcome {
    let blocked = player.action == PlayerAction::Blocking && player.stamina > 0;
    let taken = if blocked {
        player.stamina -= 1;
        player.stamina_cooldown = STAMINA_REGEN_TICKS;
        damage / 2
    } else {
        damage
    };

    player.health = (player.health - taken).max(0);
    player.score -= taken * SCORE_PER_DAMAGE;
    let dead = player.is_dead();

    cues.push(if dead {
        Sound::PlayerDeath
    } else if blocked {
        Sound::PlayerBlock
    } else {
        Sound::PlayerHit
    });
    HitOutcome {
        taken,
        blocked,
        dead,
    }
}

/// Resolve a swing that just started.  Every live enemy within weapon reach
/// takes the weapon's damage; every live enemy out of reach gets a miss cue.
/// Returns the number of enemies hit.
pub fn player_attack(
    player: &mut Player,
    enemies: &mut [Enemy],
    sprites: &mut [Sprite],
    cues: &mut Cues,
) -> usize {
    let weapon = player.weapon.def;
    let origin = player.pos();
    let mut hits = 0;

    for e in enemies.iter_mut().filter(|e| e.state != EnemyState::Dead) {
        let sprite = &mut sprites[e.sprite];
        if sprite.pos.distance(origin) > weapon.range {
            cues.push(Sound::Miss);
            continue;
        }
        hits += 1;
        e.health -= weapon.damage;
        player.score += SCORE_PER_HIT;
        cues.push(Sound::EnemyHit);

        if e.health <= 0 {
            kill(e, sprite, cues);
            player.score += SCORE_PER_KILL;
        }
    }

    hits
}

/// Enemy dies: corpse texture, no longer solid.
pub(super) fn kill(enemy: &mut Enemy, sprite: &mut Sprite, cues: &mut Cues) {
    enemy.state = EnemyState::Dead;
    sprite.texture = enemy.proto.textures.dead;
    sprite.flags.remove(SpriteFlags::SOLID);
    cues.push(enemy.proto.sounds.death);
    log::debug!("enemy {} ({}) died", enemy.sprite_id, enemy.proto.id);
}
