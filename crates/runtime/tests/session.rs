use pet_content::{default_catalog, default_config};
use pet_core::{
    Catalog, DecisionKind, EngineError, FixedDecisions, GameConfig, Gender, Pet, ScriptedDecisions,
    ScriptedRng, Species, calculate_score,
};
use pet_runtime::{
    Caretaker, GameSession, IdlePolicy, PetSpec, PlayerSpec, SessionError, parse_roster,
};

fn bundled_session(seed: u64) -> GameSession {
    let mut game = GameSession::new(
        default_config().unwrap(),
        default_catalog().unwrap(),
        seed,
    );
    for player in parse_roster("Ann:Rex=dog+Tom=cat,Bob:Nanook=polar_bear,Cy:goat+horse").unwrap()
    {
        game.add_player(&player).unwrap();
    }
    game
}

fn lone_cat(rng: ScriptedRng, days: u32) -> GameSession {
    let mut game = GameSession::with_random_source(
        GameConfig::with_number_of_days(days),
        Catalog::default(),
        Box::new(rng),
    );
    game.add_player(&PlayerSpec {
        name: "Ann".into(),
        pets: vec![PetSpec::new("Tom", Species::Cat)],
    })
    .unwrap();
    game
}

#[test]
fn same_seed_same_game() {
    let mut first = bundled_session(2024);
    let mut second = bundled_session(2024);

    let first_standings = first
        .run(&mut Caretaker::new(), &mut Caretaker::new())
        .unwrap();
    let second_standings = second
        .run(&mut Caretaker::new(), &mut Caretaker::new())
        .unwrap();

    assert_eq!(first_standings, second_standings);
    assert_eq!(first.players(), second.players());
    assert_eq!(first.seed(), Some(2024));
}

#[test]
fn full_game_ranks_every_player() {
    let mut game = bundled_session(7);
    let standings = game
        .run(&mut Caretaker::new(), &mut Caretaker::new())
        .unwrap();

    assert_eq!(game.day(), game.config().number_of_days);
    assert_eq!(standings.len(), 3);
    for (position, standing) in standings.iter().enumerate() {
        assert_eq!(standing.rank, position + 1);
        let player = game
            .players()
            .iter()
            .find(|player| player.name() == standing.player)
            .unwrap();
        assert_eq!(player.final_score(), Some(standing.score));
        assert_eq!(standing.score, calculate_score(player, &game.config().score));
    }
    assert!(standings.windows(2).all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn unanswered_death_fails_the_day_without_touching_the_pet() {
    // A roll of 0 always passes the 2% death check.
    let mut game = lone_cat(ScriptedRng::constant(0), 3);
    let mut decisions = ScriptedDecisions::new([]);

    let err = game.run_day(&mut decisions, &mut IdlePolicy).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Engine(EngineError::NoDecisionProvided {
            kind: DecisionKind::Death,
            ..
        })
    ));
    assert_eq!(decisions.asked(), &[DecisionKind::Death]);

    let fresh = Pet::new("Tom", Species::Cat, Gender::Female);
    let player = &game.players()[0];
    assert_eq!(player.pets()[0].vitals(), fresh.vitals());
    assert_eq!(player.balance(), 0);
    assert_eq!(game.day(), 0);
}

#[test]
fn failed_day_is_rolled_back_and_replayed() {
    let mut game = GameSession::with_random_source(
        GameConfig::with_number_of_days(1),
        Catalog::default(),
        Box::new(ScriptedRng::constant(0)),
    );
    for (player, pet) in [("A", "a"), ("B", "b")] {
        game.add_player(&PlayerSpec {
            name: player.into(),
            pets: vec![PetSpec::new(pet, Species::Horse)],
        })
        .unwrap();
    }
    let fresh = Pet::new("horse", Species::Horse, Gender::Male);

    // A's horse is revived, B's death goes unanswered.
    let mut decisions = ScriptedDecisions::new([true]);
    let err = game.run_day(&mut decisions, &mut IdlePolicy).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Engine(EngineError::NoDecisionProvided { .. })
    ));
    assert_eq!(decisions.asked(), &[DecisionKind::Death, DecisionKind::Death]);
    assert_eq!(game.day(), 0);
    assert!(!game.is_over());
    for player in game.players() {
        assert_eq!(player.balance(), 0);
        assert_eq!(player.pets()[0].vitals(), fresh.vitals());
    }

    let summary = game
        .run_day(&mut FixedDecisions(true), &mut IdlePolicy)
        .unwrap();
    assert_eq!(summary.day, 1);
    assert_eq!(summary.players.len(), 2);
    assert_eq!(game.day(), 1);
    assert!(game.is_over());

    let [a, b] = game.players() else {
        panic!("two players joined");
    };
    assert_eq!(a.balance(), 10);
    assert_eq!(b.balance(), 10);
    assert_eq!(a.pets()[0].vitals(), b.pets()[0].vitals());
    assert_ne!(a.pets()[0].vitals(), fresh.vitals());
}

#[test]
fn dead_pets_cost_points_and_allowance() {
    let mut game = lone_cat(ScriptedRng::constant(0), 2);
    let mut decisions = FixedDecisions(false);

    let day_one = game.run_day(&mut decisions, &mut IdlePolicy).unwrap();
    assert_eq!(day_one.deaths(), 1);
    assert_eq!(day_one.players[0].allowance, 10);

    let day_two = game.run_day(&mut decisions, &mut IdlePolicy).unwrap();
    assert_eq!(day_two.players[0].allowance, 0);
    assert!(day_two.players[0].pets.is_empty());

    let standings = game.finish();
    assert_eq!(standings[0].score, 10 - 50);
}

#[test]
fn revival_happens_once() {
    let mut game = lone_cat(ScriptedRng::constant(0), 2);
    let mut decisions = FixedDecisions(true);

    let day_one = game.run_day(&mut decisions, &mut IdlePolicy).unwrap();
    assert_eq!(day_one.deaths(), 0);
    assert!(game.players()[0].pets()[0].is_alive());

    let day_two = game.run_day(&mut decisions, &mut IdlePolicy).unwrap();
    assert_eq!(day_two.deaths(), 1);
    assert!(game.players()[0].all_pets_dead());
}
