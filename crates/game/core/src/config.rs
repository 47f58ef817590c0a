/// Weights used by [`crate::scoring::calculate_score`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreWeights {
    /// Points per unit of money left in the ledger.
    pub balance: i64,
    /// Points per health point of each living pet.
    pub health: i64,
    /// Points per happiness point of each living pet.
    pub happiness: i64,
    /// Points subtracted for every dead pet.
    pub dead_pet_penalty: i64,
}

impl ScoreWeights {
    pub const DEFAULT_BALANCE: i64 = 1;
    pub const DEFAULT_HEALTH: i64 = 1;
    pub const DEFAULT_HAPPINESS: i64 = 1;
    pub const DEFAULT_DEAD_PET_PENALTY: i64 = 50;
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            balance: Self::DEFAULT_BALANCE,
            health: Self::DEFAULT_HEALTH,
            happiness: Self::DEFAULT_HAPPINESS,
            dead_pet_penalty: Self::DEFAULT_DEAD_PET_PENALTY,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// How many days the game runs for.
    pub number_of_days: u32,
    /// Money credited per living pet at the start of each player's turn.
    pub daily_allowance: i64,
    /// Care actions (feed, play, sleep, toilet) each pet may receive per day.
    pub actions_per_pet: u32,
    /// Price of curing a sick pet.
    pub treatment_cost: i64,
    pub score: ScoreWeights,
}

impl GameConfig {
    // ===== compile-time limits =====
    pub const MAX_PLAYERS: usize = 3;
    pub const MAX_PETS_PER_PLAYER: usize = 3;
    /// Upper bound on policy choices per pet per day, including rejected ones.
    pub const MAX_CHOICES_PER_PET: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_NUMBER_OF_DAYS: u32 = 5;
    pub const DEFAULT_DAILY_ALLOWANCE: i64 = 10;
    pub const DEFAULT_ACTIONS_PER_PET: u32 = 2;
    pub const DEFAULT_TREATMENT_COST: i64 = 50;

    pub fn new() -> Self {
        Self {
            number_of_days: Self::DEFAULT_NUMBER_OF_DAYS,
            daily_allowance: Self::DEFAULT_DAILY_ALLOWANCE,
            actions_per_pet: Self::DEFAULT_ACTIONS_PER_PET,
            treatment_cost: Self::DEFAULT_TREATMENT_COST,
            score: ScoreWeights::default(),
        }
    }

    pub fn with_number_of_days(number_of_days: u32) -> Self {
        Self {
            number_of_days,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
