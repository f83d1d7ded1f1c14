use bitflags::bitflags;
use glam::Vec2;

use crate::defs::SpriteFlags;
use crate::world::{SpriteDef, SpriteId, TextureId};

/// Runtime copy of a level sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: SpriteId,
    pub pos: Vec2,
    pub texture: TextureId,
    /// Palette index replacing every opaque texel when set.
    pub tint: Option<u8>,
    pub flags: SpriteFlags,
    pub collected: bool,
}

impl From<&SpriteDef> for Sprite {
    fn from(def: &SpriteDef) -> Self {
        Self {
            id: def.id,
            pos: def.pos,
            texture: def.texture,
            tint: def.tint,
            flags: def.flags,
            collected: false,
        }
    }
}

bitflags! {
    /// Logical buttons sampled once per tic.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Buttons: u16 {
        const FORWARD    = 0x0001;
        const BACK       = 0x0002;
        const TURN_LEFT  = 0x0004;
        const TURN_RIGHT = 0x0008;
        const ATTACK     = 0x0010;
        const BLOCK      = 0x0020;
        const CONFIRM    = 0x0040;
        const CANCEL     = 0x0080;
    }
}

/// The fixed set of logical actions the input provider is asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
    Attack,
    Block,
    Confirm,
    Cancel,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Forward,
        Action::Back,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Attack,
        Action::Block,
        Action::Confirm,
        Action::Cancel,
    ];

    pub const fn button(self) -> Buttons {
        match self {
            Action::Forward => Buttons::FORWARD,
            Action::Back => Buttons::BACK,
            Action::TurnLeft => Buttons::TURN_LEFT,
            Action::TurnRight => Buttons::TURN_RIGHT,
            Action::Attack => Buttons::ATTACK,
            Action::Block => Buttons::BLOCK,
            Action::Confirm => Buttons::CONFIRM,
            Action::Cancel => Buttons::CANCEL,
        }
    }
}

/// Polled key-down queries.
pub trait InputSource {
    fn is_down(&self, action: Action) -> bool;
}

/// One tic worth of input: what is held, and what went down this tic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCmd {
    pub held: Buttons,
    pub pressed: Buttons,
}

impl InputCmd {
    /// Buttons that all went down this tic.
    pub fn new(held: Buttons) -> Self {
        Self {
            held,
            pressed: held,
        }
    }

    /// Sample `src`; edges are computed against the previous tic.
    pub fn poll(src: &impl InputSource, previous: &InputCmd) -> Self {
        let held = Action::ALL
            .into_iter()
            .filter(|a| src.is_down(*a))
            .fold(Buttons::empty(), |acc, a| acc | a.button());
        Self {
            held,
            pressed: held.difference(previous.held),
        }
    }

    #[inline]
    pub fn holds(&self, b: Buttons) -> bool {
        self.held.contains(b)
    }

    #[inline]
    pub fn went_down(&self, b: Buttons) -> bool {
        self.pressed.contains(b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    Paused,
    GameOver,
    Win,
}

/// What the main loop should do after a tic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
