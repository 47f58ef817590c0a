//! The game session: roster, day loop and final ranking.
use pet_core::{
    ActionError, Catalog, DailyEngine, DayReport, DecisionOracle, Gender, GameConfig, PcgRng,
    Pet, Player, RandomSource, rank_players,
};

use crate::config::PlayerSpec;
use crate::error::{Result, SessionError};
use crate::policy::{InteractionPolicy, PetAction, TurnView};

/// A running game.
///
/// Days are played strictly in order. Within a day, players take their turns
/// in the order they joined, and each player's pets in the order they were
/// adopted. One seeded generator is shared by everything that draws.
pub struct GameSession {
    config: GameConfig,
    catalog: Catalog,
    players: Vec<Player>,
    rng: Box<dyn RandomSource>,
    seed: Option<u64>,
    day: u32,
}

/// What happened to one pet on one day.
#[derive(Clone, Debug, PartialEq)]
pub struct PetDay {
    pub pet: String,
    pub report: DayReport,
    /// Care actions that succeeded.
    pub actions: u32,
    /// Choices that were rejected.
    pub rejections: u32,
}

/// One player's turn.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerDay {
    pub player: String,
    pub allowance: i64,
    pub pets: Vec<PetDay>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DaySummary {
    pub day: u32,
    pub players: Vec<PlayerDay>,
}

impl DaySummary {
    pub fn deaths(&self) -> usize {
        self.players
            .iter()
            .flat_map(|player| &player.pets)
            .filter(|pet| pet.report.died())
            .count()
    }
}

/// A player's place once the game is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalStanding {
    pub rank: usize,
    pub player: String,
    pub score: i64,
}

impl GameSession {
    /// A session whose draws come from a [`PcgRng`] seeded with `seed`.
    pub fn new(config: GameConfig, catalog: Catalog, seed: u64) -> Self {
        tracing::info!(seed, "seeding random generator");
        let rng = Box::new(PcgRng::seeded(seed));
        let mut session = Self::with_random_source(config, catalog, rng);
        session.seed = Some(seed);
        session
    }

    pub fn with_random_source(
        config: GameConfig,
        catalog: Catalog,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        tracing::info!(
            days = config.number_of_days,
            foods = catalog.foods.len(),
            toys = catalog.toys.len(),
            "new game session"
        );
        Self {
            config,
            catalog,
            players: Vec::new(),
            rng,
            seed: None,
            day: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The seed, when the session owns a seeded generator.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of days played so far.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_over(&self) -> bool {
        self.day >= self.config.number_of_days
    }

    /// Adds a player with their pets. Each pet's gender is drawn from the
    /// shared generator.
    ///
    /// Names must be unique across every player and pet in the game.
    pub fn add_player(&mut self, spec: &PlayerSpec) -> Result<&Player> {
        if self.day > 0 {
            return Err(SessionError::AlreadyStarted { day: self.day });
        }
        if self.players.len() >= GameConfig::MAX_PLAYERS {
            return Err(SessionError::TooManyPlayers {
                max: GameConfig::MAX_PLAYERS,
            });
        }
        let count = spec.pets.len();
        if count == 0 || count > GameConfig::MAX_PETS_PER_PLAYER {
            return Err(SessionError::InvalidPetCount {
                player: spec.name.clone(),
                count,
                max: GameConfig::MAX_PETS_PER_PLAYER,
            });
        }

        let mut taken: Vec<&str> = self
            .players
            .iter()
            .flat_map(|player| {
                std::iter::once(player.name()).chain(player.pets().iter().map(Pet::name))
            })
            .collect();
        let joining = std::iter::once(spec.name.as_str())
            .chain(spec.pets.iter().map(|pet| pet.name.as_str()));
        for name in joining {
            if name.trim().is_empty() {
                return Err(SessionError::BlankName);
            }
            if taken.contains(&name) {
                return Err(SessionError::DuplicateName(name.to_owned()));
            }
            taken.push(name);
        }

        let mut player = Player::new(spec.name.clone());
        for pet in &spec.pets {
            let gender = Gender::random(&mut *self.rng);
            player.add_pet(Pet::new(pet.name.clone(), pet.species, gender));
        }
        tracing::info!(player = %spec.name, pets = count, "player joined");

        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Plays the next day.
    ///
    /// For each player: credit the allowance for every living pet, then for
    /// each living pet apply the day's drift and events and hand the pet to
    /// `policy` for care. A pet that dies during its events gets no care turn.
    ///
    /// The day is played on a copy of the roster and committed only once
    /// every pet is done. If an event goes unanswered the day stops with the
    /// error, players and the day counter are left as they were, and the next
    /// call replays the same day. Draws already taken stay consumed.
    pub fn run_day(
        &mut self,
        decisions: &mut dyn DecisionOracle,
        policy: &mut dyn InteractionPolicy,
    ) -> Result<DaySummary> {
        if self.players.is_empty() {
            return Err(SessionError::NoPlayers);
        }
        if self.is_over() {
            return Err(SessionError::GameOver {
                days: self.config.number_of_days,
            });
        }

        let day = self.day + 1;
        tracing::info!(day, "day started");

        let mut players = self.players.clone();
        let mut engine = DailyEngine::new(&self.config, &mut *self.rng, decisions);
        let summary = play_day(
            day,
            &self.config,
            &self.catalog,
            &mut engine,
            &mut players,
            policy,
        )
        .inspect_err(|error| tracing::warn!(day, %error, "day abandoned"))?;

        self.players = players;
        self.day = day;
        Ok(summary)
    }

    /// Plays every remaining day, then ranks the players.
    pub fn run(
        &mut self,
        decisions: &mut dyn DecisionOracle,
        policy: &mut dyn InteractionPolicy,
    ) -> Result<Vec<FinalStanding>> {
        while !self.is_over() {
            self.run_day(decisions, policy)?;
        }
        Ok(self.finish())
    }

    /// Scores every player and returns the ranking, best first. Ties keep
    /// the order in which players joined.
    pub fn finish(&mut self) -> Vec<FinalStanding> {
        let standings: Vec<FinalStanding> = rank_players(&self.players, &self.config.score)
            .into_iter()
            .map(|standing| FinalStanding {
                rank: standing.rank,
                player: standing.player.name().to_owned(),
                score: standing.score,
            })
            .collect();

        for standing in &standings {
            if let Some(player) = self.players.iter_mut().find(|p| p.name() == standing.player) {
                player.set_final_score(standing.score);
            }
            tracing::info!(
                rank = standing.rank,
                player = %standing.player,
                score = standing.score,
                "final standing"
            );
        }
        tracing::info!(days = self.day, "game over");
        standings
    }
}

/// Every player's turn for one day, in joining order.
fn play_day(
    day: u32,
    config: &GameConfig,
    catalog: &Catalog,
    engine: &mut DailyEngine<'_>,
    players: &mut [Player],
    policy: &mut dyn InteractionPolicy,
) -> Result<DaySummary> {
    let mut summary = DaySummary {
        day,
        players: Vec::with_capacity(players.len()),
    };

    for player in players.iter_mut() {
        let allowance = player.collect_allowance(config.daily_allowance)?;
        tracing::debug!(
            player = player.name(),
            allowance,
            balance = player.balance(),
            "allowance credited"
        );

        let mut turn = PlayerDay {
            player: player.name().to_owned(),
            allowance,
            pets: Vec::new(),
        };
        for index in 0..player.pets().len() {
            let pet_day = play_pet(day, config, catalog, engine, player, index, policy)?;
            turn.pets.extend(pet_day);
        }
        summary.players.push(turn);
    }

    Ok(summary)
}

/// Events then care for a single pet. Returns `None` for pets that were
/// already dead at the start of the day.
fn play_pet(
    day: u32,
    config: &GameConfig,
    catalog: &Catalog,
    engine: &mut DailyEngine<'_>,
    player: &mut Player,
    index: usize,
    policy: &mut dyn InteractionPolicy,
) -> Result<Option<PetDay>> {
    let (mut pet_day, died) = {
        let Some((pet, ledger)) = player.pet_and_ledger_mut(index) else {
            return Ok(None);
        };
        if pet.is_dead() {
            return Ok(None);
        }
        let report = engine.process_day(pet, ledger)?;
        let pet_day = PetDay {
            pet: pet.name().to_owned(),
            report,
            actions: 0,
            rejections: 0,
        };
        (pet_day, pet.is_dead())
    };
    log_report(player.name(), &pet_day.pet, &pet_day.report);
    if died {
        return Ok(Some(pet_day));
    }

    let mut actions_left = config.actions_per_pet;
    let mut choices = 0;

    policy.start_turn(&view(day, player, index, actions_left, catalog));
    while actions_left > 0 && choices < GameConfig::MAX_CHOICES_PER_PET {
        choices += 1;
        let action = policy.choose(&view(day, player, index, actions_left, catalog));
        if action == PetAction::MoveOn {
            break;
        }

        match apply(player, catalog, index, &action) {
            Ok(()) => {
                if action.consumes_action() {
                    actions_left -= 1;
                    pet_day.actions += 1;
                }
            }
            Err(error) => {
                tracing::warn!(
                    player = player.name(),
                    pet = %pet_day.pet,
                    ?action,
                    %error,
                    "action rejected"
                );
                pet_day.rejections += 1;
                policy.rejected(&action, &error);
            }
        }
    }

    Ok(Some(pet_day))
}

fn view<'a>(
    day: u32,
    player: &'a Player,
    pet_index: usize,
    actions_left: u32,
    catalog: &'a Catalog,
) -> TurnView<'a> {
    TurnView {
        day,
        player,
        pet_index,
        actions_left,
        catalog,
    }
}

fn apply(
    player: &mut Player,
    catalog: &Catalog,
    pet_index: usize,
    action: &PetAction,
) -> std::result::Result<(), ActionError> {
    match action {
        PetAction::Feed(food) => player.feed_pet(pet_index, *food),
        PetAction::Play(toy) => {
            let outcome = player.play_with_pet(pet_index, *toy)?;
            if outcome.is_depleted() {
                tracing::debug!(player = player.name(), "toy worn out");
            }
            Ok(())
        }
        PetAction::Sleep => player.put_pet_to_bed(pet_index),
        PetAction::Toilet => player.take_pet_to_toilet(pet_index),
        PetAction::BuyFood(name) => {
            let price = player.buy_food(catalog, name)?.price;
            tracing::info!(player = player.name(), item = %name, price, "bought food");
            Ok(())
        }
        PetAction::BuyToy(name) => {
            let price = player.buy_toy(catalog, name)?.price;
            tracing::info!(player = player.name(), item = %name, price, "bought toy");
            Ok(())
        }
        PetAction::MoveOn => Ok(()),
    }
}

fn log_report(player: &str, pet: &str, report: &DayReport) {
    if report.health_penalty < 0 {
        tracing::debug!(player, pet, penalty = report.health_penalty, "exhaustion");
    }
    if let Some(outcome) = report.misbehavior {
        tracing::info!(player, pet, %outcome, "misbehavior");
    }
    if let Some(outcome) = report.sickness {
        tracing::info!(player, pet, %outcome, spent = report.spent, "sickness");
    }
    if let Some(outcome) = report.death {
        tracing::info!(player, pet, %outcome, "death");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PetSpec;
    use crate::policy::{IdlePolicy, ScriptedPolicy};
    use pet_core::{FixedDecisions, FoodItem, ScriptedRng, Species, ToyItem};

    fn spec(name: &str, pets: &[(&str, Species)]) -> PlayerSpec {
        PlayerSpec {
            name: name.into(),
            pets: pets
                .iter()
                .map(|(pet, species)| PetSpec::new(*pet, *species))
                .collect(),
        }
    }

    fn session(days: u32) -> GameSession {
        let catalog = Catalog::new(
            vec![FoodItem::new("Kibble", 5, 10).with_health_increase(Species::Dog, 2)],
            vec![ToyItem::new("Ball", 8, 1).with_happiness_increase(Species::Dog, 10)],
        );
        // 99 never triggers an event for a well-kept pet.
        GameSession::with_random_source(
            GameConfig::with_number_of_days(days),
            catalog,
            Box::new(ScriptedRng::constant(99)),
        )
    }

    #[test]
    fn names_are_unique_across_players_and_pets() {
        let mut game = session(1);
        game.add_player(&spec("Ann", &[("Rex", Species::Dog)])).unwrap();

        let err = game
            .add_player(&spec("Bob", &[("Ann", Species::Cat)]))
            .unwrap_err();
        assert!(matches!(err, SessionError::DuplicateName(name) if name == "Ann"));

        let err = game
            .add_player(&spec("Cy", &[("Tom", Species::Cat), ("Tom", Species::Goat)]))
            .unwrap_err();
        assert!(matches!(err, SessionError::DuplicateName(name) if name == "Tom"));
        assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn roster_limits_are_enforced() {
        let mut game = session(1);
        assert!(matches!(
            game.add_player(&spec("Ann", &[])),
            Err(SessionError::InvalidPetCount { count: 0, .. })
        ));
        assert!(matches!(
            game.add_player(&spec(
                "Ann",
                &[
                    ("A", Species::Cat),
                    ("B", Species::Cat),
                    ("C", Species::Cat),
                    ("D", Species::Cat)
                ]
            )),
            Err(SessionError::InvalidPetCount { count: 4, .. })
        ));

        for (player, pet) in [("P1", "a"), ("P2", "b"), ("P3", "c")] {
            game.add_player(&spec(player, &[(pet, Species::Horse)])).unwrap();
        }
        assert!(matches!(
            game.add_player(&spec("P4", &[("d", Species::Horse)])),
            Err(SessionError::TooManyPlayers { max: 3 })
        ));
    }

    #[test]
    fn empty_game_cannot_start() {
        let mut game = session(1);
        assert!(matches!(
            game.run_day(&mut FixedDecisions(true), &mut IdlePolicy),
            Err(SessionError::NoPlayers)
        ));
    }

    #[test]
    fn allowance_is_credited_per_living_pet() {
        let mut game = session(2);
        game.add_player(&spec("Ann", &[("Rex", Species::Dog), ("Tom", Species::Cat)]))
            .unwrap();

        let summary = game
            .run_day(&mut FixedDecisions(true), &mut IdlePolicy)
            .unwrap();
        assert_eq!(summary.day, 1);
        assert_eq!(summary.players[0].allowance, 20);
        assert_eq!(game.players()[0].balance(), 20);
    }

    #[test]
    fn purchases_are_free_and_care_is_capped() {
        let mut game = session(1);
        game.add_player(&spec("Ann", &[("Rex", Species::Dog)])).unwrap();

        let mut policy = ScriptedPolicy::new([
            PetAction::BuyFood("Kibble".into()),
            PetAction::Feed(0),
            PetAction::Sleep,
            PetAction::Toilet,
        ]);
        let summary = game
            .run_day(&mut FixedDecisions(true), &mut policy)
            .unwrap();

        let pet_day = &summary.players[0].pets[0];
        assert_eq!(pet_day.actions, 2);
        assert_eq!(policy.remaining(), 1);
        assert_eq!(game.players()[0].balance(), 5);
        assert!(game.players()[0].food_stock().is_empty());
    }

    #[test]
    fn rejected_actions_are_reported_and_change_nothing() {
        let mut game = session(1);
        game.add_player(&spec("Ann", &[("Rex", Species::Dog)])).unwrap();

        let mut policy = ScriptedPolicy::new([
            PetAction::Play(0),
            PetAction::BuyToy("Frisbee".into()),
            PetAction::BuyToy("Ball".into()),
            PetAction::BuyToy("Ball".into()),
        ]);
        let summary = game
            .run_day(&mut FixedDecisions(true), &mut policy)
            .unwrap();

        assert_eq!(summary.players[0].pets[0].rejections, 3);
        assert!(matches!(
            policy.rejections()[0].1,
            ActionError::NoSuchItem { .. }
        ));
        assert!(matches!(
            policy.rejections()[1].1,
            ActionError::UnknownItem { .. }
        ));
        assert!(matches!(policy.rejections()[2].1, ActionError::Ledger(_)));
        assert_eq!(game.players()[0].balance(), 2);
        assert_eq!(game.players()[0].toys().len(), 1);
    }

    #[test]
    fn runaway_policy_is_cut_off() {
        let mut game = session(1);
        game.add_player(&spec("Ann", &[("Rex", Species::Dog)])).unwrap();

        let mut policy = ScriptedPolicy::new(std::iter::repeat_n(PetAction::Feed(9), 100));
        let summary = game
            .run_day(&mut FixedDecisions(true), &mut policy)
            .unwrap();

        assert_eq!(
            summary.players[0].pets[0].rejections as usize,
            GameConfig::MAX_CHOICES_PER_PET
        );
    }

    #[test]
    fn game_ends_after_configured_days() {
        let mut game = session(2);
        game.add_player(&spec("Ann", &[("Rex", Species::Dog)])).unwrap();

        let standings = game
            .run(&mut FixedDecisions(true), &mut IdlePolicy)
            .unwrap();
        assert!(game.is_over());
        assert_eq!(game.day(), 2);
        assert_eq!(standings.len(), 1);
        assert_eq!(game.players()[0].final_score(), Some(standings[0].score));

        assert!(matches!(
            game.run_day(&mut FixedDecisions(true), &mut IdlePolicy),
            Err(SessionError::GameOver { days: 2 })
        ));
        assert!(matches!(
            game.add_player(&spec("Late", &[("Zed", Species::Goat)])),
            Err(SessionError::AlreadyStarted { day: 2 })
        ));
    }
}
