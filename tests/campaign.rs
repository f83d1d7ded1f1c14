//! Whole-frame scenarios driven through the engine with no window.

use glam::{Vec2, vec2};

use meniskos::{
    audio::{AudioEvent, RecordingAudio, Sound, Track},
    config::Config,
    defs::{SpriteFlags, levels, textures},
    engine::Engine,
    renderer::Software,
    sim::{
        Buttons, EnemyState, Flow, GameMode, InputCmd, MAX_HEALTH, MAX_STAMINA, SCORE_PER_PICKUP,
        Sim,
    },
};

type Headless = Engine<Software, RecordingAudio>;

fn engine() -> Headless {
    let sim = Sim::new(levels::campaign().unwrap(), 0).unwrap();
    Engine::new(
        Software::default(),
        sim,
        textures::builtin_bank().unwrap(),
        RecordingAudio::default(),
        &Config::default(),
    )
}

fn step(e: &mut Headless, held: Buttons) -> Flow {
    e.frame(&InputCmd::new(held), |_, _, _| {})
}

fn idle(e: &mut Headless, frames: usize) {
    for _ in 0..frames {
        step(e, Buttons::empty());
    }
}

/// Menu → first level.
fn playing() -> Headless {
    let mut e = engine();
    step(&mut e, Buttons::CONFIRM);
    assert_eq!(e.sim.mode(), GameMode::Playing);
    e
}

/// Park the first enemy at `offset` from the player.
fn enemy_at(e: &mut Headless, offset: Vec2) {
    let slot = e.sim.enemies[0].sprite;
    e.sim.sprites[slot].pos = e.sim.player.pos() + offset;
}

fn goal_pos(e: &Headless) -> Vec2 {
    e.sim
        .sprites
        .iter()
        .find(|s| s.flags.contains(SpriteFlags::GOAL))
        .map(|s| s.pos)
        .unwrap()
}

fn sounds(e: &Headless) -> Vec<Sound> {
    e.mixer.backend().sounds().collect()
}

fn count(sounds: &[Sound], which: Sound) -> usize {
    sounds.iter().filter(|&&s| s == which).count()
}

#[test]
fn telegraphed_hit_lands_after_wind_up() {
    let mut e = playing();
    e.sim.player.health = 10;
    e.sim.enemies[0].damage = 4;
    enemy_at(&mut e, Vec2::ZERO);

    idle(&mut e, 30);
    assert_eq!(e.sim.enemies[0].state, EnemyState::Attacking);
    assert_eq!(e.sim.player.health, 10);

    idle(&mut e, 60);
    assert_eq!(e.sim.player.health, 6);
    assert_eq!(e.sim.player.score, -40);
    assert_eq!(e.sim.enemies[0].state, EnemyState::Idle);

    let s = sounds(&e);
    assert_eq!(count(&s, Sound::WormTelegraph), 1);
    assert_eq!(count(&s, Sound::PlayerHit), 1);
}

#[test]
fn three_swings_kill_and_fourth_is_ignored() {
    let mut e = playing();
    e.sim.enemies[0].damage = 0;
    enemy_at(&mut e, vec2(0.5, 0.0));

    // half a second per swing: 120 tics hold four of them
    for _ in 0..120 {
        step(&mut e, Buttons::ATTACK);
    }

    let worm = e.sim.enemies[0];
    assert_eq!(worm.state, EnemyState::Dead);
    assert_eq!(worm.health, 0);
    let corpse = &e.sim.sprites[worm.sprite];
    assert_eq!(corpse.texture, textures::WORM_DEAD);
    assert!(!corpse.flags.contains(SpriteFlags::SOLID));

    let s = sounds(&e);
    assert_eq!(count(&s, Sound::EnemyHit), 3);
    assert_eq!(count(&s, Sound::WormDeath), 1);
    assert_eq!(e.sim.player.stamina, MAX_STAMINA - 4);
}

#[test]
fn gem_advances_to_next_spawn() {
    let mut e = playing();
    e.sim.player.health = 50;
    e.sim.player.stamina = 2;
    e.sim.player.camera.pos = goal_pos(&e);

    idle(&mut e, 1);
    assert_eq!(e.sim.level_index(), 1);
    assert!(!e.sim.gem_picked_up());
    assert_eq!(e.sim.player.score, SCORE_PER_PICKUP);
    assert_eq!(e.sim.player.health, MAX_HEALTH);
    assert_eq!(e.sim.player.stamina, MAX_STAMINA);
    assert_eq!(e.sim.player.pos(), levels::WOODWORKS.spawn);
    assert!(sounds(&e).contains(&Sound::LevelClear));
}

#[test]
fn death_ends_the_run() {
    let mut e = playing();
    e.sim.player.health = 1;
    enemy_at(&mut e, Vec2::ZERO);

    idle(&mut e, 90);
    assert_eq!(e.sim.mode(), GameMode::GameOver);
    assert_eq!(e.sim.player.health, 0);
    assert!(sounds(&e).contains(&Sound::PlayerDeath));

    idle(&mut e, 10);
    assert_eq!(e.sim.mode(), GameMode::GameOver);
    step(&mut e, Buttons::CONFIRM);
    assert_eq!(e.sim.mode(), GameMode::Menu);
    assert_eq!(e.sim.level_index(), 0);
}

#[test]
fn last_gem_wins_the_campaign() {
    let mut e = playing();
    let last = e.sim.level_count() - 1;
    e.sim.load_level(last);
    e.sim.player.camera.pos = goal_pos(&e);

    idle(&mut e, 1);
    assert_eq!(e.sim.mode(), GameMode::Win);
    assert!(sounds(&e).contains(&Sound::Victory));

    let mut drawn = 0;
    e.render_frame(|fb, _, _| drawn = fb.len());
    assert!(drawn > 0);
}

#[test]
fn quit_from_menu_and_pause() {
    let mut e = engine();
    assert_eq!(step(&mut e, Buttons::CANCEL), Flow::Quit);

    let mut e = playing();
    assert_eq!(step(&mut e, Buttons::CANCEL), Flow::Continue);
    assert_eq!(e.sim.mode(), GameMode::Paused);
    assert_eq!(step(&mut e, Buttons::CANCEL), Flow::Quit);
}

#[test]
fn music_switches_once_per_mode_change() {
    let mut e = playing();
    idle(&mut e, 20);
    step(&mut e, Buttons::CANCEL);
    idle(&mut e, 5);
    step(&mut e, Buttons::CONFIRM);

    let tracks: Vec<Track> = e
        .mixer
        .backend()
        .events
        .iter()
        .filter_map(|ev| match ev {
            AudioEvent::Music(t) => Some(*t),
            _ => None,
        })
        .collect();
    assert_eq!(tracks, vec![Track::Menu, Track::Dungeon]);
    assert_eq!(e.mixer.current_track(), Some(Track::Dungeon));
}
