//! Whole games played headlessly through the public API

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use std::time::Duration;

use snake_cells::game::{
    Direction, GameConfig, GameController, GameEngine, InputAction, ManualScheduler,
    RecordingPresenter, Scheduler, TickOutcome,
};
use snake_cells::input::{Button, InputEvent, InputMapper};

type Controller = GameController<RecordingPresenter, ManualScheduler>;

fn controller(seed: u64) -> Controller {
    let engine = GameEngine::with_seed(GameConfig::default(), seed);
    let mut controller =
        GameController::new(engine, RecordingPresenter::new(), ManualScheduler::new());
    controller.start();
    controller
}

fn assert_invariants(controller: &Controller) {
    let state = controller.state();
    let cells: HashSet<_> = state.snake.body.iter().copied().collect();

    assert!(!state.snake.is_empty());
    assert_eq!(cells.len(), state.snake.len(), "snake overlaps itself");
    assert!(!cells.contains(&state.food), "food inside the snake");
    assert!(state.snake.body.iter().all(|&cell| cell < state.total_cells()));
    assert!(state.food < state.total_cells());
}

#[test]
fn test_first_tick_from_start() {
    // Any seed whose first food is not right in front of the snake
    let mut controller = (0..)
        .map(controller)
        .find(|c| c.state().food != 22)
        .unwrap();

    assert_eq!(controller.state().snake.body, vec![21, 20]);
    assert_eq!(controller.tick(), TickOutcome::Moved { ate_food: false });

    let state = controller.state();
    assert_eq!(state.snake.body, vec![22, 21]);
    assert!(!state.snake.occupies(20));
    assert_eq!(state.score, 0);
}

#[test]
fn test_run_into_right_wall() {
    let mut controller = controller(5);

    // From column 1 the head reaches column 19 after 18 moves; the 19th hits the wall.
    let mut outcome = TickOutcome::Paused;
    for _ in 0..19 {
        outcome = controller.tick();
        if outcome.is_terminal() {
            break;
        }
    }

    assert!(outcome.is_terminal(), "snake wrapped instead of dying: {outcome:?}");
    assert_eq!(controller.presenter().game_overs.len(), 1);
    assert_eq!(controller.state().snake.body, vec![21, 20]);
}

#[test]
fn test_run_into_top_wall() {
    let mut controller = controller(6);
    assert!(controller.set_direction(Direction::Up));

    // 21 -> 1 is still on the grid; the next step up is not.
    assert!(matches!(controller.tick(), TickOutcome::Moved { .. }));
    assert_eq!(controller.state().snake.head(), 1);
    assert!(matches!(controller.tick(), TickOutcome::GameOver { .. }));
}

#[test]
fn test_reset_is_repeatable() {
    let mut controller = controller(8);

    for _ in 0..20 {
        controller.set_direction(Direction::Down);
        controller.tick();
        controller.reset();

        let state = controller.state();
        assert_eq!(state.snake.body, vec![21, 20]);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert!(!state.paused);
        assert!(!state.snake.occupies(state.food));
        assert_eq!(controller.scheduler().period, Some(Duration::from_millis(150)));
    }
}

#[test]
fn test_random_play_keeps_invariants() {
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    let mut rng = StdRng::seed_from_u64(2024);
    let mut controller = controller(99);
    let mut games = 0;

    for _ in 0..5_000 {
        if rng.gen_bool(0.3) {
            controller.set_direction(directions[rng.gen_range(0..4)]);
        }
        if rng.gen_bool(0.01) {
            controller.toggle_pause();
        }

        let score = controller.state().score;
        let length = controller.state().snake.len();
        match controller.tick() {
            TickOutcome::Moved { ate_food: true } => {
                assert_eq!(controller.state().score, score + 10);
                assert_eq!(controller.state().snake.len(), length + 1);
            }
            TickOutcome::Moved { ate_food: false } => {
                assert_eq!(controller.state().score, score);
                assert_eq!(controller.state().snake.len(), length);
            }
            TickOutcome::Paused => assert_eq!(controller.state().score, score),
            TickOutcome::GameOver { score: final_score, .. } => {
                assert_eq!(final_score, score);
                games += 1;
            }
            TickOutcome::BoardFilled { .. } => games += 1,
        }

        assert_invariants(&controller);
        assert!(controller.scheduler().is_running());
    }

    assert!(games > 0);
    assert_eq!(controller.presenter().game_overs.len(), games);
}

#[test]
fn test_inputs_drive_a_game() {
    let mut controller = controller(12);
    let mut mapper = InputMapper::new(20.0);

    let swipe = [
        InputEvent::TouchStart { x: 100.0, y: 100.0 },
        InputEvent::TouchMove { x: 104.0, y: 130.0 },
    ];
    for event in swipe {
        controller.apply(mapper.map(event));
    }
    assert_eq!(controller.state().direction, Direction::Down);

    assert!(controller.apply(mapper.map(InputEvent::Button(Button::Pause))));
    assert!(controller.state().paused);
    assert_eq!(controller.presenter().last_pause_label(), Some("Resume"));
    assert_eq!(controller.tick(), TickOutcome::Paused);

    assert!(controller.apply(mapper.map(InputEvent::Button(Button::Reset))));
    assert!(!controller.state().paused);
    assert_eq!(controller.state().direction, Direction::Right);

    assert!(!controller.apply(InputAction::Quit));
}
