//! Coin balance and cosmetic unlocks
//!
//! Currency is credited one coin at a time, mid-run, as pickups report in;
//! nothing is awarded at run end. Two cosmetic tracks: bird skins are bought
//! with the spendable balance, coin trinkets unlock automatically from
//! lifetime earnings. Lifetime earnings never decrease.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Coins granted by a daily claim
pub const DAILY_REWARD: u64 = 100;
/// Minimum spacing between daily claims
pub const DAILY_COOLDOWN_MS: u64 = 24 * 60 * 60 * 1000;

/// Purchasable bird skins (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum BirdSkin {
    #[default]
    Classic,
    Rage,
    Chill,
    Zombie,
    Princess,
    Ninja,
    Mecha,
    Midas,
    Prism,
    Spirit,
    Cyber,
    Hero,
}

impl BirdSkin {
    /// Cost in spendable coins
    pub fn cost(&self) -> u64 {
        match self {
            BirdSkin::Classic => 0,
            BirdSkin::Rage => 50,
            BirdSkin::Chill => 100,
            BirdSkin::Zombie => 200,
            BirdSkin::Princess => 300,
            BirdSkin::Ninja => 500,
            BirdSkin::Mecha => 800,
            BirdSkin::Midas => 1500,
            BirdSkin::Prism => 2500,
            BirdSkin::Spirit => 3000,
            BirdSkin::Cyber => 12000,
            BirdSkin::Hero => 20000,
        }
    }
}

/// Coin trinkets, gated by lifetime earnings rather than spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Trinket {
    #[default]
    Gold,
    Silver,
    Bronze,
    Platinum,
    Ruby,
    Emerald,
    Sapphire,
    Void,
    Galaxy,
    Master,
}

impl Trinket {
    /// Lifetime coins required to unlock
    pub fn unlock_threshold(&self) -> u64 {
        match self {
            Trinket::Gold => 0,
            Trinket::Silver => 50,
            Trinket::Bronze => 100,
            Trinket::Platinum => 200,
            Trinket::Ruby => 300,
            Trinket::Emerald => 400,
            Trinket::Sapphire => 500,
            Trinket::Void => 2000,
            Trinket::Galaxy => 2500,
            Trinket::Master => 10000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomyError {
    NotEnoughCoins,
    AlreadyOwned,
    Locked,
    TooSoon,
}

impl std::fmt::Display for EconomyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EconomyError::NotEnoughCoins => write!(f, "not enough coins"),
            EconomyError::AlreadyOwned => write!(f, "already owned"),
            EconomyError::Locked => write!(f, "not yet unlocked"),
            EconomyError::TooSoon => write!(f, "daily reward not ready"),
        }
    }
}

impl std::error::Error for EconomyError {}

/// Per-user economy state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyState {
    /// Spendable balance
    pub coins: u64,
    /// Cumulative coins ever earned; gates trinket unlocks, never decreases
    pub lifetime_coins: u64,
    pub unlocked_birds: BTreeSet<BirdSkin>,
    pub selected_bird: BirdSkin,
    pub selected_trinket: Trinket,
    /// Unix-ms timestamp of the last daily claim
    pub last_daily_claim_ms: u64,
}

impl Default for EconomyState {
    fn default() -> Self {
        let mut unlocked_birds = BTreeSet::new();
        unlocked_birds.insert(BirdSkin::Classic);
        Self {
            coins: 0,
            lifetime_coins: 0,
            unlocked_birds,
            selected_bird: BirdSkin::Classic,
            selected_trinket: Trinket::Gold,
            last_daily_claim_ms: 0,
        }
    }
}

impl EconomyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one collected coin, immediately.
    ///
    /// De-duplication happens upstream: the simulation's `collected` flag
    /// guarantees at most one call per coin instance.
    pub fn credit_coin(&mut self) {
        self.coins += 1;
        self.lifetime_coins += 1;
    }

    /// Buy a bird skin with the spendable balance; unlocks and selects it.
    pub fn buy_bird(&mut self, skin: BirdSkin) -> Result<(), EconomyError> {
        if self.unlocked_birds.contains(&skin) {
            return Err(EconomyError::AlreadyOwned);
        }
        let cost = skin.cost();
        if self.coins < cost {
            return Err(EconomyError::NotEnoughCoins);
        }
        self.coins -= cost;
        self.unlocked_birds.insert(skin);
        self.selected_bird = skin;
        log::info!("bought skin {:?} for {} coins", skin, cost);
        Ok(())
    }

    /// Select an owned bird skin
    pub fn select_bird(&mut self, skin: BirdSkin) -> Result<(), EconomyError> {
        if !self.unlocked_birds.contains(&skin) {
            return Err(EconomyError::Locked);
        }
        self.selected_bird = skin;
        Ok(())
    }

    /// Trinkets unlock purely from lifetime earnings; nothing is spent.
    pub fn is_trinket_unlocked(&self, trinket: Trinket) -> bool {
        self.lifetime_coins >= trinket.unlock_threshold()
    }

    pub fn select_trinket(&mut self, trinket: Trinket) -> Result<(), EconomyError> {
        if !self.is_trinket_unlocked(trinket) {
            return Err(EconomyError::Locked);
        }
        self.selected_trinket = trinket;
        Ok(())
    }

    /// Claim the daily reward if the cooldown has elapsed.
    ///
    /// The reward raises the spendable balance only; it does not count
    /// toward the lifetime gate.
    pub fn claim_daily(&mut self, now_ms: u64) -> Result<u64, EconomyError> {
        if now_ms.saturating_sub(self.last_daily_claim_ms) <= DAILY_COOLDOWN_MS {
            return Err(EconomyError::TooSoon);
        }
        self.coins += DAILY_REWARD;
        self.last_daily_claim_ms = now_ms;
        log::info!("daily reward claimed: +{} coins", DAILY_REWARD);
        Ok(DAILY_REWARD)
    }
}
