//! Entities that live on the play-field
//!
//! Every entity is an axis-aligned box in display-pixel space. Player,
//! obstacles and coins share the box ([`Body`]) and carry their sprite as
//! plain data; [`Entity`] is the closed set used when something needs to
//! treat them uniformly (collision queries, drawing).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ENTITY_SIZE, FALL_SPEED, OFF_FIELD_X};

/// Sprite identifiers. Bitmaps live with the display backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    /// Dino run cycle (frame 0 or 1)
    Player(u8),
    Cactus,
    Coin,
    /// Start screen artwork
    Title,
    /// Artwork shown on the victory and defeat screens
    Finale,
}

impl SpriteId {
    /// Fixed pixel dimensions of the bitmap
    pub fn size(&self) -> IVec2 {
        match self {
            SpriteId::Player(_) | SpriteId::Cactus | SpriteId::Coin => {
                IVec2::splat(ENTITY_SIZE)
            }
            SpriteId::Title | SpriteId::Finale => IVec2::new(64, 114),
        }
    }
}

/// Axis-aligned box: top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Body {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Box with the default 32x32 entity size
    pub fn square(x: i32, y: i32) -> Self {
        Self::new(x, y, ENTITY_SIZE, ENTITY_SIZE)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// True if the box covers no pixels
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }
}

/// Player jump state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpState {
    #[default]
    Grounded,
    Airborne,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub jump: JumpState,
    /// Fall increment applied per tick while airborne
    pub fall_speed: i32,
    /// Index of the level the player is running on
    pub level: usize,
    /// Run-cycle frame parity (0 or 1)
    pub frame: u8,
}

impl Player {
    /// Create a player standing at the left edge of the given floor
    pub fn new(floor: i32) -> Self {
        Self {
            body: Body::square(0, floor - ENTITY_SIZE),
            jump: JumpState::Grounded,
            fall_speed: FALL_SPEED,
            level: 0,
            frame: 0,
        }
    }

    /// Resting vertical position on a floor
    #[inline]
    pub fn rest_y(&self, floor: i32) -> i32 {
        floor - self.body.height()
    }

    pub fn is_airborne(&self) -> bool {
        self.jump == JumpState::Airborne
    }

    /// Back to the level start: left edge, standing on the floor
    pub fn reset(&mut self, floor: i32) {
        self.body.pos = IVec2::new(0, self.rest_y(floor));
        self.jump = JumpState::Grounded;
    }

    /// Flip the run-cycle frame
    pub fn toggle_frame(&mut self) {
        self.frame ^= 1;
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::Player(self.frame)
    }
}

/// A cactus. Never destroyed; an inactive one is ignored by collision and drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    pub sprite: SpriteId,
    active: bool,
}

impl Obstacle {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::square(x, y),
            sprite: SpriteId::Cactus,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Permanently remove from play. There is no way back.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub body: Body,
    pub sprite: SpriteId,
    collected: bool,
}

impl Coin {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::square(x, y),
            sprite: SpriteId::Coin,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark collected and park the coin off-field.
    ///
    /// Returns the box the coin occupied, or `None` if it was already taken.
    pub fn collect(&mut self) -> Option<Body> {
        if self.collected {
            return None;
        }
        let footprint = self.body;
        self.collected = true;
        self.body.pos.x = OFF_FIELD_X;
        Some(footprint)
    }
}

/// Uniform view over everything on the field
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Player(&'a Player),
    Obstacle(&'a Obstacle),
    Coin(&'a Coin),
}

impl Entity<'_> {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Player(p) => &p.body,
            Entity::Obstacle(o) => &o.body,
            Entity::Coin(c) => &c.body,
        }
    }

    /// Sprite to draw, or `None` if the entity is out of play
    pub fn sprite(&self) -> Option<SpriteId> {
        match self {
            Entity::Player(p) => Some(p.sprite()),
            Entity::Obstacle(o) => o.is_active().then_some(o.sprite),
            Entity::Coin(c) => (!c.is_collected()).then_some(c.sprite),
        }
    }

    /// Whether the entity still takes part in collision checks
    pub fn is_collidable(&self) -> bool {
        match self {
            Entity::Player(_) => true,
            Entity::Obstacle(o) => o.is_active(),
            Entity::Coin(c) => !c.is_collected(),
        }
    }
}
