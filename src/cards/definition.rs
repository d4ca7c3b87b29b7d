//! Card definitions - static card data.
//!
//! A `Card` holds everything printed on an ability card: usage tier, speed,
//! aim mode, and the optional attack, movement, and area profiles. Cards are
//! plain values; copies in a deck are independent clones.
//!
//! The resolver currently consumes only the movement tile count. The combat
//! fields are carried so that presentation and future rules can read them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identifier of a card definition (e.g. `"ftr_cleave"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardClass {
    Fighter,
}

/// How often a card may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Usage {
    #[serde(rename = "At-Will")]
    AtWill,
    Encounter,
    Daily,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Attack,
    Movement,
    Utility,
    Hybrid,
}

/// Action economy slot the card consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Standard,
    Move,
    Minor,
    Immediate,
}

/// How the card is aimed when queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AimMode {
    /// A direction is chosen at queue time.
    DirectionPrequeued,
    /// A target cell is captured at queue time.
    TargetSnapshot,
    /// No aim; the card affects its user.
    #[serde(rename = "self")]
    SelfTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttackProfile {
    Melee { reach: u8 },
    MeleeSweep { primary_reach: u8, splash: u8 },
    RangedTarget { range: u8 },
    ProjectileLine { range: u8, projectile_speed: u8 },
    CloseBlast { size: u8 },
}

/// Defense an attack is rolled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Defense {
    #[serde(rename = "AC")]
    ArmorClass,
    Fortitude,
    Reflex,
    Will,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Damage {
    /// Dice expression, e.g. `"2"` or `"1d6"`.
    pub dice: String,
    pub bonus: i32,
}

/// What happens when an attack misses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissPolicy {
    #[serde(default)]
    pub half_damage: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Any cardinal direction.
    Any,
    /// A straight line chosen at queue time.
    ChosenLine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementSpec {
    /// Tiles to travel. Signed because definitions are not validated; the
    /// resolver clamps negatives to zero.
    pub tiles: i32,
    pub direction: MoveDirection,
    #[serde(default)]
    pub before_attack: bool,
    #[serde(default)]
    pub ignores_opportunity: bool,
    #[serde(default)]
    pub must_end_adjacent_enemy: bool,
}

impl MovementSpec {
    #[must_use]
    pub fn new(tiles: i32, direction: MoveDirection) -> Self {
        Self {
            tiles,
            direction,
            before_attack: false,
            ignores_opportunity: false,
            must_end_adjacent_enemy: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneShape {
    Square,
    Burst,
}

/// A conjured area left on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub shape: ZoneShape,
    pub size: u8,
    pub duration_turns: u8,
    #[serde(default)]
    pub blocks_los: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_heal_each_turn: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy_dot_each_turn: Option<i32>,
}

/// A named effect (mark, push, resist, ...) with optional parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_turns: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Effect {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            tiles: None,
            radius: None,
            duration_turns: None,
            condition: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_tiles(mut self, tiles: u8) -> Self {
        self.tiles = Some(tiles);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: u8) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, turns: u8) -> Self {
        self.duration_turns = Some(turns);
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use nexus_tactics::cards::{Card, CardType, ActionType, Usage, MovementSpec, MoveDirection};
///
/// let step = Card::new("move_step", Usage::AtWill, CardType::Movement, ActionType::Move)
///     .with_movement(MovementSpec::new(1, MoveDirection::Any))
///     .with_copies(4);
///
/// assert_eq!(step.movement_tiles(), Some(1));
/// assert_eq!(step.copies_allowed, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub class: CardClass,
    pub usage: Usage,
    pub cooldown_turns: u8,
    pub card_type: CardType,
    pub action: ActionType,
    pub keywords: SmallVec<[String; 4]>,
    /// Lower is intended to be faster. Not consulted by tick resolution.
    pub speed: u8,
    pub aim_mode: AimMode,
    pub copies_allowed: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_profile: Option<AttackProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_vs: Option<Defense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<Damage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miss: Option<MissPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<MovementSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneSpec>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub interaction_tags: Vec<String>,
}

impl Card {
    /// Create a Fighter card with no profiles, speed 1, self-aimed, one copy.
    #[must_use]
    pub fn new(id: impl Into<String>, usage: Usage, card_type: CardType, action: ActionType) -> Self {
        Self {
            id: CardId::new(id),
            class: CardClass::Fighter,
            usage,
            cooldown_turns: 0,
            card_type,
            action,
            keywords: SmallVec::new(),
            speed: 1,
            aim_mode: AimMode::SelfTarget,
            copies_allowed: 1,
            attack_profile: None,
            attack_vs: None,
            damage: None,
            miss: None,
            movement: None,
            zone: None,
            effects: Vec::new(),
            interaction_tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cooldown(mut self, turns: u8) -> Self {
        self.cooldown_turns = turns;
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| (*k).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_aim(mut self, aim_mode: AimMode) -> Self {
        self.aim_mode = aim_mode;
        self
    }

    #[must_use]
    pub fn with_copies(mut self, copies: u8) -> Self {
        self.copies_allowed = copies;
        self
    }

    /// Attach an attack profile rolled against `vs`.
    #[must_use]
    pub fn with_attack(mut self, profile: AttackProfile, vs: Defense) -> Self {
        self.attack_profile = Some(profile);
        self.attack_vs = Some(vs);
        self
    }

    #[must_use]
    pub fn with_damage(mut self, dice: impl Into<String>, bonus: i32) -> Self {
        self.damage = Some(Damage {
            dice: dice.into(),
            bonus,
        });
        self
    }

    #[must_use]
    pub fn with_miss(mut self, miss: MissPolicy) -> Self {
        self.miss = Some(miss);
        self
    }

    #[must_use]
    pub fn with_movement(mut self, movement: MovementSpec) -> Self {
        self.movement = Some(movement);
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: ZoneSpec) -> Self {
        self.zone = Some(zone);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.interaction_tags.push(tag.into());
        self
    }

    /// Declared movement tile count, if the card moves its user.
    #[must_use]
    pub fn movement_tiles(&self) -> Option<i32> {
        self.movement.map(|m| m.tiles)
    }

    /// Whether queuing this card requires choosing a direction.
    #[must_use]
    pub fn needs_direction(&self) -> bool {
        self.aim_mode == AimMode::DirectionPrequeued
            || matches!(
                self.movement,
                Some(MovementSpec {
                    direction: MoveDirection::Any | MoveDirection::ChosenLine,
                    ..
                })
            )
    }

    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("ftr_cleave");
        assert_eq!(id.as_str(), "ftr_cleave");
        assert_eq!(format!("{}", id), "ftr_cleave");
        assert_eq!(CardId::from("x"), CardId::new("x"));
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new("test", Usage::Encounter, CardType::Hybrid, ActionType::Standard)
            .with_cooldown(3)
            .with_keywords(&["Movement", "Weapon"])
            .with_speed(2)
            .with_aim(AimMode::DirectionPrequeued)
            .with_attack(AttackProfile::Melee { reach: 1 }, Defense::ArmorClass)
            .with_damage("3", 0);

        assert_eq!(card.cooldown_turns, 3);
        assert!(card.has_keyword("Weapon"));
        assert!(!card.has_keyword("Stance"));
        assert_eq!(card.attack_vs, Some(Defense::ArmorClass));
        assert_eq!(card.movement_tiles(), None);
        assert!(card.needs_direction());
    }

    #[test]
    fn test_needs_direction() {
        let stance = Card::new("stance", Usage::Encounter, CardType::Utility, ActionType::Minor);
        assert!(!stance.needs_direction());

        let step = Card::new("step", Usage::AtWill, CardType::Movement, ActionType::Move)
            .with_movement(MovementSpec::new(1, MoveDirection::Any));
        assert!(step.needs_direction());

        let strike = Card::new("strike", Usage::AtWill, CardType::Attack, ActionType::Standard)
            .with_aim(AimMode::TargetSnapshot);
        assert!(!strike.needs_direction());
    }

    #[test]
    fn test_effect_builder() {
        let effect = Effect::named("resist")
            .with_value(1)
            .with_duration(2)
            .with_condition("weapon");
        assert_eq!(effect.value, Some(1));
        assert_eq!(effect.condition.as_deref(), Some("weapon"));
        assert_eq!(effect.tiles, None);
    }

    #[test]
    fn test_serialized_names() {
        let card = Card::new("s", Usage::AtWill, CardType::Movement, ActionType::Move)
            .with_attack(AttackProfile::MeleeSweep { primary_reach: 1, splash: 1 }, Defense::ArmorClass);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["usage"], "At-Will");
        assert_eq!(json["aim_mode"], "self");
        assert_eq!(json["attack_profile"]["kind"], "melee_sweep");
        assert!(json.get("damage").is_none());
        assert!(json.get("movement").is_none());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new("dash", Usage::Encounter, CardType::Movement, ActionType::Move)
            .with_movement(MovementSpec::new(2, MoveDirection::Any))
            .with_miss(MissPolicy { half_damage: true, chip: None })
            .with_effect(Effect::named("mark").with_duration(1));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
