mod collision;
mod combat;
mod components;
mod enemy;
mod player;
mod tic;

pub use collision::{ENEMY_RADIUS, SPRITE_BLOCK_DIST};
pub use combat::{HitOutcome, SCORE_PER_DAMAGE, SCORE_PER_HIT, SCORE_PER_KILL};
pub use components::{Action, Buttons, Flow, GameMode, InputCmd, InputSource, Sprite};
pub use enemy::{Enemy, EnemyState};
pub use player::{
    COLLISION_PROBE, MAX_HEALTH, MAX_STAMINA, MOVE_SPEED, Player, PlayerAction,
    STAMINA_REGEN_TICKS, TURN_RATE, WEAPON_ANIM_TICKS, Weapon,
};
pub use tic::{SCORE_PER_PICKUP, SIM_FPS, Sim, secs_to_ticks};
