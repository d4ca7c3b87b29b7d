//! The card catalog: a fixed, immutable list of card definitions.
//!
//! `CardCatalog` keeps cards in definition order (deck construction depends
//! on it) and indexes them by id for lookup. The Fighter catalog is built
//! once and shared.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use super::definition::{
    ActionType, AimMode, AttackProfile, Card, CardId, CardType, Defense, Effect, MissPolicy,
    MoveDirection, MovementSpec, Usage,
};

/// Id of the filler card used to pad starter decks.
pub const FILLER_CARD: &str = "move_step";

/// Ordered card definitions with id lookup.
///
/// ## Example
///
/// ```
/// use nexus_tactics::cards::CardCatalog;
///
/// let catalog = CardCatalog::fighter();
/// let cleave = catalog.get("ftr_cleave").unwrap();
/// assert_eq!(cleave.copies_allowed, 2);
/// assert!(catalog.get("fireball").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// The shared Fighter catalog.
    #[must_use]
    pub fn fighter() -> &'static CardCatalog {
        static FIGHTER: OnceLock<CardCatalog> = OnceLock::new();
        FIGHTER.get_or_init(|| {
            let mut catalog = CardCatalog::new();
            for card in fighter_cards() {
                catalog.register(card);
            }
            catalog
        })
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.card_type == card_type)
    }
}

/// The Fighter card list.
#[must_use]
pub fn fighter_cards() -> Vec<Card> {
    vec![
        Card::new("ftr_cleave", Usage::AtWill, CardType::Attack, ActionType::Standard)
            .with_keywords(&["Weapon", "Melee", "Multi-target"])
            .with_speed(2)
            .with_aim(AimMode::TargetSnapshot)
            .with_attack(AttackProfile::MeleeSweep { primary_reach: 1, splash: 1 }, Defense::ArmorClass)
            .with_damage("2", 0)
            .with_effect(Effect::named("mark").with_duration(1))
            .with_tag("bonus_if_adjacent_wall")
            .with_copies(2),
        Card::new("ftr_reaping_strike", Usage::AtWill, CardType::Attack, ActionType::Standard)
            .with_keywords(&["Weapon", "Melee", "Reliability"])
            .with_speed(2)
            .with_aim(AimMode::TargetSnapshot)
            .with_attack(AttackProfile::Melee { reach: 1 }, Defense::ArmorClass)
            .with_damage("2", 0)
            .with_miss(MissPolicy { half_damage: false, chip: Some(1) })
            .with_copies(2),
        Card::new("ftr_shield_push", Usage::AtWill, CardType::Attack, ActionType::Standard)
            .with_keywords(&["Weapon", "Melee", "Control"])
            .with_speed(1)
            .with_aim(AimMode::TargetSnapshot)
            .with_attack(AttackProfile::Melee { reach: 1 }, Defense::ArmorClass)
            .with_damage("1", 1)
            .with_effect(Effect::named("push_target").with_tiles(1))
            .with_effect(Effect::named("self_shift").with_tiles(1))
            .with_tag("push_into_hazard_bonus")
            .with_copies(2),
        Card::new("ftr_line_charge", Usage::Encounter, CardType::Hybrid, ActionType::Standard)
            .with_cooldown(3)
            .with_keywords(&["Movement", "Weapon"])
            .with_speed(2)
            .with_aim(AimMode::DirectionPrequeued)
            .with_movement(MovementSpec {
                must_end_adjacent_enemy: true,
                ..MovementSpec::new(2, MoveDirection::ChosenLine)
            })
            .with_attack(AttackProfile::Melee { reach: 1 }, Defense::ArmorClass)
            .with_damage("3", 0)
            .with_tag("extra_if_into_wall_or_hazard")
            .with_copies(1),
        Card::new("ftr_guardian_stance", Usage::Encounter, CardType::Utility, ActionType::Minor)
            .with_cooldown(3)
            .with_keywords(&["Stance", "Defense"])
            .with_speed(1)
            .with_aim(AimMode::SelfTarget)
            .with_effect(Effect::named("mark_zone").with_radius(1).with_duration(2))
            .with_effect(
                Effect::named("resist")
                    .with_value(1)
                    .with_duration(2)
                    .with_condition("weapon"),
            )
            .with_copies(1),
        Card::new("ftr_brute_finish", Usage::Daily, CardType::Attack, ActionType::Standard)
            .with_cooldown(6)
            .with_keywords(&["Weapon", "Melee", "High-damage"])
            .with_speed(4)
            .with_aim(AimMode::TargetSnapshot)
            .with_attack(AttackProfile::Melee { reach: 1 }, Defense::ArmorClass)
            .with_damage("5", 1)
            .with_miss(MissPolicy { half_damage: true, chip: None })
            .with_copies(1),
        Card::new("side_step", Usage::AtWill, CardType::Movement, ActionType::Move)
            .with_keywords(&["Movement"])
            .with_movement(MovementSpec::new(2, MoveDirection::Any))
            .with_copies(4),
        Card::new(FILLER_CARD, Usage::AtWill, CardType::Movement, ActionType::Move)
            .with_keywords(&["Movement"])
            .with_movement(MovementSpec::new(2, MoveDirection::Any))
            .with_copies(4),
        // Slower: risks getting hit first once speed is consulted
        Card::new("dash_step", Usage::Encounter, CardType::Movement, ActionType::Move)
            .with_cooldown(3)
            .with_keywords(&["Movement"])
            .with_speed(3)
            .with_movement(MovementSpec {
                ignores_opportunity: true,
                ..MovementSpec::new(3, MoveDirection::Any)
            })
            .with_copies(2),
    ]
}
