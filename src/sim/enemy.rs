//! Enemy state machine: chase, telegraph, strike, recover.

use super::combat;
use super::player::Player;
use super::tic::{SIM_FPS, secs_to_ticks};
use super::{Sprite, collision};
use crate::audio::Cues;
use crate::defs::EnemyPrototype;
use crate::world::{EnemySpawn, GridMap, SpriteId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnemyState {
    #[default]
    Idle,
    Moving,
    /// Wind-up shown; the hit lands when the cooldown runs out.
    Attacking,
    Dead,
}

#[derive(Clone, Copy, Debug)]
pub struct Enemy {
    pub sprite_id: SpriteId,
    /// Slot of the owning sprite in the sim's sprite list.
    pub sprite: usize,
    pub proto: &'static EnemyPrototype,
    pub health: i32,
    pub damage: i32,
    pub state: EnemyState,
    /// Tics left on the current telegraph or recovery.
    pub cooldown: i32,
}

impl Enemy {
    pub fn new(
        sprite_id: SpriteId,
        sprite: usize,
        proto: &'static EnemyPrototype,
        health: i32,
        damage: i32,
    ) -> Self {
        Self {
            sprite_id,
            sprite,
            proto,
            health,
            damage,
            state: EnemyState::Idle,
            cooldown: 0,
        }
    }
}

impl From<&EnemySpawn> for Enemy {
    fn from(s: &EnemySpawn) -> Self {
        Self::new(s.sprite_id, s.sprite, s.proto, s.health, s.damage)
    }
}

/// Run one tic of every enemy.  Returns `true` as soon as the player dies;
/// the remaining enemies are not updated that tic.
pub fn think(
    enemies: &mut [Enemy],
    sprites: &mut [Sprite],
    player: &mut Player,
    grid: &GridMap,
    cues: &mut Cues,
) -> bool {
    for e in enemies.iter_mut() {
        if e.state == EnemyState::Dead {
            continue;
        }
        let slot = e.sprite;
        if e.health <= 0 {
            combat::kill(e, &mut sprites[slot], cues);
            continue;
        }

        let proto = e.proto;
        let here = sprites[slot].pos;
        let target = player.pos();
        let dist = here.distance(target);

        /* 1. chase or settle */
        if matches!(e.state, EnemyState::Idle | EnemyState::Moving) {
            if dist <= proto.movement_range && dist > proto.attack_range {
                let step = (target - here).normalize_or_zero() * proto.movement_speed / SIM_FPS as f32;
                let next = collision::enemy_move(grid, sprites, slot, step);
                sprites[slot].pos = next;
                if e.state == EnemyState::Idle {
                    cues.push(proto.sounds.alert);
                    log::debug!("{} {} gives chase at {dist:.2}", proto.id, e.sprite_id);
                }
                e.state = EnemyState::Moving;
            } else {
                e.state = EnemyState::Idle;
            }

            /* 2. wind up */
            if e.state == EnemyState::Idle && dist <= proto.attack_range && e.cooldown <= 0 {
                e.state = EnemyState::Attacking;
                e.cooldown = secs_to_ticks(proto.attack_speed);
                sprites[slot].texture = proto.textures.attack;
                cues.push(proto.sounds.telegraph);
                log::debug!("{} {} winds up", proto.id, e.sprite_id);
            }
        }

        /* 3. strike or give up */
        if e.state == EnemyState::Attacking {
            if dist > proto.attack_range {
                e.state = EnemyState::Idle;
                sprites[slot].texture = proto.textures.idle;
            } else if e.cooldown <= 0 {
                let hit = combat::hit_player(player, e.damage, cues);
                log::debug!("{} {} strikes: {hit:?}", proto.id, e.sprite_id);
                e.cooldown = secs_to_ticks(proto.attack_cooldown);
                e.state = EnemyState::Idle;
                sprites[slot].texture = proto.textures.idle;
                if hit.dead {
                    log::info!("player killed by {} {}", proto.id, e.sprite_id);
                    return true;
                }
            }
        }

        log::trace!("{} {} {:?} cd {}", proto.id, e.sprite_id, e.state, e.cooldown);

        /* 4. count down */
        if e.cooldown > 0 {
            e.cooldown -= 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Sound;
    use crate::defs::{self, SpriteFlags, textures};
    use glam::{Vec2, vec2};

    fn grid() -> GridMap {
        GridMap::from_rows(&[
            "1111111111",
            "1000000001",
            "1000000001",
            "1000000001",
            "1111111111",
        ])
        .unwrap()
    }

    fn worm_at(pos: Vec2) -> (Vec<Enemy>, Vec<Sprite>) {
        let proto = defs::prototype("WORM").unwrap();
        let sprite = Sprite {
            id: 1,
            pos,
            texture: textures::WORM,
            tint: None,
            flags: SpriteFlags::SOLID,
            collected: false,
        };
        (vec![Enemy::new(1, 0, proto, 3, 4)], vec![sprite])
    }

    #[test]
    fn out_of_range_enemy_idles() {
        let g = grid();
        let mut p = Player::new(vec2(1.5, 1.5), vec2(1.0, 0.0));
        let (mut enemies, mut sprites) = worm_at(vec2(8.5, 3.5));
        // WORM notices at 6 tiles; this one is ~7.3 away
        let mut cues = Cues::new();
        think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        assert_eq!(enemies[0].state, EnemyState::Idle);
        assert_eq!(sprites[0].pos, vec2(8.5, 3.5));
        assert!(cues.is_empty());
    }

    #[test]
    fn chasing_enemy_closes_distance_and_alerts_once() {
        let g = grid();
        let mut p = Player::new(vec2(1.5, 2.5), vec2(1.0, 0.0));
        let (mut enemies, mut sprites) = worm_at(vec2(5.5, 2.5));
        let mut cues = Cues::new();
        for _ in 0..10 {
            think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        }
        assert_eq!(enemies[0].state, EnemyState::Moving);
        // 0.75 tiles/s over 10 tics
        assert!((sprites[0].pos.x - (5.5 - 0.125)).abs() < 1e-4);
        assert_eq!(cues.as_slice(), &[Sound::WormAlert]);
    }

    #[test]
    fn telegraphed_hit_lands_after_attack_speed() {
        let g = grid();
        let mut p = Player::new(vec2(2.5, 2.5), vec2(1.0, 0.0));
        p.health = 10;
        let (mut enemies, mut sprites) = worm_at(vec2(2.5, 2.5));
        let mut cues = Cues::new();

        think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        assert_eq!(enemies[0].state, EnemyState::Attacking);
        assert_eq!(sprites[0].texture, textures::WORM_ATTACK);
        assert_eq!(cues.as_slice(), &[Sound::WormTelegraph]);

        for _ in 0..59 {
            think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        }
        assert_eq!(p.health, 10);
        think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        assert_eq!(p.health, 6);
        assert_eq!(p.score, -40);
        assert_eq!(enemies[0].state, EnemyState::Idle);
        assert_eq!(sprites[0].texture, textures::WORM);
        assert_eq!(enemies[0].cooldown, secs_to_ticks(3.0) - 1);
    }

    #[test]
    fn retreating_player_cancels_wind_up() {
        let g = grid();
        let mut p = Player::new(vec2(2.5, 2.5), vec2(1.0, 0.0));
        let (mut enemies, mut sprites) = worm_at(vec2(3.0, 2.5));
        let mut cues = Cues::new();
        think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        assert_eq!(enemies[0].state, EnemyState::Attacking);

        p.camera.pos = vec2(5.0, 2.5);
        think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        assert_eq!(enemies[0].state, EnemyState::Idle);
        assert_eq!(sprites[0].texture, textures::WORM);
        assert_eq!(p.health, 100);
    }

    #[test]
    fn killing_blow_stops_the_pass() {
        let g = grid();
        let mut p = Player::new(vec2(2.5, 2.5), vec2(1.0, 0.0));
        p.health = 4;
        let (mut enemies, mut sprites) = worm_at(vec2(2.5, 2.5));
        enemies[0].state = EnemyState::Attacking;
        let mut cues = Cues::new();
        assert!(think(&mut enemies, &mut sprites, &mut p, &g, &mut cues));
        assert_eq!(p.health, 0);
    }

    #[test]
    fn zero_health_enemy_becomes_corpse() {
        let g = grid();
        let mut p = Player::new(vec2(1.5, 1.5), vec2(1.0, 0.0));
        let (mut enemies, mut sprites) = worm_at(vec2(2.5, 2.5));
        enemies[0].health = 0;
        let mut cues = Cues::new();
        think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
        assert_eq!(enemies[0].state, EnemyState::Dead);
        assert_eq!(sprites[0].texture, textures::WORM_DEAD);
        assert_eq!(cues.as_slice(), &[Sound::WormDeath]);

        // corpse stays put with the player standing on it
        cues.clear();
        p.camera.pos = vec2(2.5, 2.5);
        for _ in 0..200 {
            think(&mut enemies, &mut sprites, &mut p, &g, &mut cues);
            assert_eq!(enemies[0].state, EnemyState::Dead);
        }
        assert_eq!(sprites[0].texture, textures::WORM_DEAD);
        assert_eq!(sprites[0].pos, vec2(2.5, 2.5));
        assert!(cues.is_empty());
        assert_eq!(p.health, 100);
    }
}
