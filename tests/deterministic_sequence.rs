use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::tempdir;
use tick_snake::config::GameConfig;
use tick_snake::engine::{GameEngine, TickOutcome};
use tick_snake::input::Direction;
use tick_snake::score::HighScores;
use tick_snake::snake::Position;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[test]
fn straight_run_hits_the_right_wall() {
    let dir = tempdir().expect("temp dir should be creatable");
    let path = dir.path().join("high_scores.json");
    let mut engine =
        GameEngine::new_with_seed(GameConfig::with_high_score_path(&path), 42).expect("valid");

    // Head starts at (10,10); nine moves reach column 19.
    for step in 1..=9 {
        assert!(engine.tick(), "tick {step} should keep the game running");
        assert_eq!(engine.state().snake.head(), Position::new(10 + step, 10));
    }

    assert_eq!(engine.advance(), TickOutcome::WallCollision);
    assert!(engine.state().is_game_over);
    assert_eq!(engine.state().snake.head(), Position::new(19, 10));

    let before = engine.snapshot();
    assert!(!engine.tick());
    assert_eq!(engine.snapshot(), before);

    let score = engine.state().score;
    let persisted = HighScores::load(&path);
    if score > 0 {
        assert_eq!(persisted.high_score(), score);
    } else {
        assert!(persisted.is_empty());
    }
}

#[test]
fn random_play_preserves_state_invariants() {
    let dir = tempdir().expect("temp dir should be creatable");
    let config = GameConfig {
        board_size: 8,
        ..GameConfig::with_high_score_path(dir.path().join("high_scores.json"))
    };
    let mut engine = GameEngine::new_with_seed(config, 7).expect("valid");
    let mut steering = StdRng::seed_from_u64(99);
    let mut games = 0;

    for _ in 0..5_000 {
        if engine.state().is_game_over {
            games += 1;
            engine.reset_game();
        }

        let wanted = DIRECTIONS[steering.gen_range(0..DIRECTIONS.len())];
        let heading = engine.state().direction;
        engine.change_direction(wanted);
        if wanted == heading.opposite() {
            assert_eq!(engine.state().direction, heading);
        } else {
            assert_eq!(engine.state().direction, wanted);
        }

        let before = engine.snapshot();
        let outcome = engine.advance();
        let after = engine.state();

        match outcome {
            TickOutcome::Moved => {
                assert_eq!(after.snake.len(), before.snake.len());
                assert_eq!(after.score, before.score);
            }
            TickOutcome::Ate => {
                assert_eq!(after.snake.len(), before.snake.len() + 1);
                assert_eq!(after.score, before.score + 10);
            }
            TickOutcome::WallCollision | TickOutcome::SelfCollision => {
                assert!(after.is_game_over);
                assert_eq!(after.snake, before.snake);
                continue;
            }
            TickOutcome::Victory => {
                assert!(after.is_won);
                continue;
            }
            TickOutcome::Skipped => unreachable!("engine is never paused here"),
        }

        let food = after.food.expect("food is placed while running");
        assert!(!after.snake.occupies(food));
        let mut cells: Vec<Position> = after.snake.segments().copied().collect();
        cells.sort_by_key(|cell| (cell.x, cell.y));
        cells.dedup();
        assert_eq!(cells.len(), after.snake.len(), "snake overlaps itself");
        assert!(cells.iter().all(|cell| cell.is_within_bounds(8)));
    }

    assert!(games > 0);
    assert!(engine.high_scores().len() <= 10);
    let ranked: Vec<u32> = engine
        .high_scores()
        .entries()
        .iter()
        .map(|entry| entry.score)
        .collect();
    assert!(ranked.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn scores_survive_a_restart() {
    let dir = tempdir().expect("temp dir should be creatable");
    let path = dir.path().join("scores").join("high_scores.json");

    let mut scores = HighScores::new();
    scores.add_score(50, "Player");
    scores.add_score(30, "Player");
    scores.add_score(90, "Player");
    scores.save(&path);

    let engine =
        GameEngine::new_with_seed(GameConfig::with_high_score_path(&path), 1).expect("valid");

    assert_eq!(engine.high_score(), 90);
    assert_eq!(engine.high_scores(), &scores);
}
