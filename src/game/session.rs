use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    config::GameConfig,
    error::GameError,
    food::{FoodCatalog, FoodEntity},
    grid::Grid,
    input::{InputKey, InputLatch},
    snake::SnakeState,
    spawner::FoodSpawner,
    vector::{Direction, Vector2i},
};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What happened during one call to [`GameSession::update`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Discrete steps the snake took
    pub steps: u32,
    /// Foods eaten over those steps
    pub foods_eaten: u32,
    /// Points added to the score
    pub points: u32,
    /// Foods placed on the board
    pub foods_spawned: usize,
    /// Set when this tick ended the game
    pub collision: Option<CollisionType>,
    /// Set when this tick restarted a finished game
    pub restarted: bool,
}

impl TickReport {
    /// Whether the score display needs refreshing
    pub fn score_changed(&self) -> bool {
        self.points > 0 || self.restarted
    }
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub grid: Grid,
    pub parts: &'a [Vector2i],
    pub foods: &'a [FoodEntity],
    pub catalog: &'a FoodCatalog,
    pub score: u32,
    pub game_over: bool,
}

/// One game of snake: owns the snake, the food on the board and the score.
///
/// The host calls [`update`](Self::update) once per frame with the elapsed
/// time and the current input state. Randomness comes from `R`, so a seeded
/// or mock generator gives reproducible games.
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    catalog: FoodCatalog,
    snake: SnakeState,
    foods: Vec<FoodEntity>,
    spawner: FoodSpawner,
    score: u32,
    state: SessionState,
    rng: R,
}

impl GameSession<StdRng> {
    /// Create a session with the default food catalog and an entropy-seeded RNG
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, FoodCatalog::default(), StdRng::from_entropy())
    }

    /// Create a session whose food placement is reproducible from `seed`
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, FoodCatalog::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: GameConfig, catalog: FoodCatalog, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height)?;
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        Ok(Self {
            snake: Self::fresh_snake(&grid, &config),
            config,
            grid,
            catalog,
            foods: Vec::new(),
            spawner: FoodSpawner::new(),
            score: 0,
            state: SessionState::Playing,
            rng,
        })
    }

    fn fresh_snake(grid: &Grid, config: &GameConfig) -> SnakeState {
        SnakeState::new(grid.center(), Direction::Right, config.initial_length)
    }

    /// Start over: new snake at the centre, empty board, zero score
    pub fn reset(&mut self) {
        self.snake = Self::fresh_snake(&self.grid, &self.config);
        self.foods.clear();
        self.spawner = FoodSpawner::new();
        self.score = 0;
        self.state = SessionState::Playing;
        info!("game reset");
    }

    /// Advance the simulation by `delta` time units
    pub fn update(&mut self, delta: f64, input: &InputLatch) -> TickReport {
        let mut report = TickReport::default();

        if self.state == SessionState::GameOver {
            if input.is_pressed(InputKey::Restart) {
                self.reset();
                report.restarted = true;
            }
            return report;
        }

        self.resolve_direction(input);

        let interval = self.config.move_interval_ms;
        self.snake.add_elapsed(delta);
        while self.snake.step_due(interval) {
            let head = self.snake.step();
            report.steps += 1;

            // Food is credited before collisions are judged, so a fatal bite
            // still scores.
            self.eat_at(head, &mut report);

            if let Some(collision) = self.check_collision(head) {
                self.state = SessionState::GameOver;
                report.collision = Some(collision);
                info!(?collision, score = self.score, "game over");
                return report;
            }
        }

        let spawned = self.spawner.try_spawn(
            delta,
            self.config.food_spawn_interval_ms,
            &self.grid,
            &self.catalog,
            &mut self.rng,
        );
        report.foods_spawned = spawned.len();
        self.foods.extend(spawned);

        report
    }

    /// First held direction in priority order that is not a reversal
    fn resolve_direction(&mut self, input: &InputLatch) {
        let committed = self.snake.dir();
        let wanted = Direction::PRIORITY.into_iter().find(|&dir| {
            input.is_pressed(InputKey::from(dir))
                && !committed.is_some_and(|current| current.is_opposite(dir))
        });
        if let Some(dir) = wanted {
            self.snake.request_direction(dir);
        }
    }

    fn eat_at(&mut self, cell: Vector2i, report: &mut TickReport) {
        let Some(index) = self.foods.iter().position(|food| food.position == cell) else {
            return;
        };
        let food = self.foods.remove(index);
        // kinds are only ever drawn from this catalog
        let points = self.catalog.get(food.kind).map_or(0, |kind| kind.points);

        self.snake.grow();
        self.score += points;
        report.foods_eaten += 1;
        report.points += points;
        debug!(x = cell.x, y = cell.y, points, score = self.score, "food eaten");
    }

    fn check_collision(&self, head: Vector2i) -> Option<CollisionType> {
        if !self.grid.contains(head) {
            return Some(CollisionType::Wall);
        }
        if self.snake.head_hits_body() {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// Replace the snake, e.g. to set up a scripted position
    pub fn set_snake(&mut self, snake: SnakeState) {
        self.snake = snake;
    }

    /// Drop a food onto the board outside of the spawn cadence
    pub fn place_food(&mut self, food: FoodEntity) {
        self.foods.push(food);
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            grid: self.grid,
            parts: self.snake.parts(),
            foods: &self.foods,
            catalog: &self.catalog,
            score: self.score,
            game_over: self.is_game_over(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn foods(&self) -> &[FoodEntity] {
        &self.foods
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn session() -> GameSession<StepRng> {
        GameSession::with_rng(GameConfig::small(), FoodCatalog::default(), StepRng::new(0, 0))
            .unwrap()
    }

    fn straight_right(head: Vector2i, len: usize) -> SnakeState {
        let parts = (0..len as i32).map(|i| Vector2i::new(head.x - i, head.y)).collect();
        SnakeState::from_parts(parts, Some(Direction::Right), len)
    }

    fn food_at(x: i32, y: i32, kind: usize) -> FoodEntity {
        FoodEntity {
            position: Vector2i::new(x, y),
            kind,
        }
    }

    #[test]
    fn test_reset_state() {
        let mut game = session();
        game.score = 12;
        game.state = SessionState::GameOver;
        game.place_food(food_at(1, 1, 0));

        game.reset();

        assert_eq!(game.score(), 0);
        assert!(!game.is_game_over());
        assert_eq!(game.snake().parts(), &[Vector2i::new(5, 5)]);
        assert_eq!(game.snake().length(), 4);
        assert_eq!(game.snake().dir(), None);
        assert!(game.foods().is_empty());
    }

    #[test]
    fn test_no_step_until_interval_exceeded() {
        let mut game = session();
        let input = InputLatch::new();

        assert_eq!(game.update(300.0, &input).steps, 0);
        assert_eq!(game.snake().head(), Vector2i::new(5, 5));

        assert_eq!(game.update(1.0, &input).steps, 1);
        assert_eq!(game.snake().head(), Vector2i::new(6, 5));
        assert_eq!(game.snake().move_elapsed(), 1.0);
    }

    #[test]
    fn test_catch_up_steps_in_one_tick() {
        let mut game = session();
        let report = game.update(950.0, &InputLatch::new());

        assert_eq!(report.steps, 3);
        assert_eq!(game.snake().head(), Vector2i::new(8, 5));
        assert_eq!(game.snake().move_elapsed(), 50.0);
    }

    #[test]
    fn test_eating_scores_and_grows() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(6, 5), 4));
        game.place_food(food_at(7, 5, 2));

        let report = game.update(301.0, &InputLatch::new());

        assert_eq!(report.foods_eaten, 1);
        assert_eq!(report.points, 3);
        assert!(report.score_changed());
        assert_eq!(game.score(), 3);
        assert_eq!(game.snake().length(), 5);
        assert!(game.foods().is_empty());

        // The tail was trimmed on the eating step; the extra segment shows
        // up on the next one.
        assert_eq!(game.snake().parts().len(), 4);
        game.update(300.0, &InputLatch::new());
        assert_eq!(game.snake().parts().len(), 5);
        assert_eq!(game.snake().head(), Vector2i::new(8, 5));
    }

    #[test]
    fn test_eating_on_vacated_tail_cell_is_safe() {
        let mut game = session();
        // 2x2 loop: the head moves onto the cell the tail is leaving
        let snake = SnakeState::from_parts(
            vec![
                Vector2i::new(5, 5),
                Vector2i::new(6, 5),
                Vector2i::new(6, 4),
                Vector2i::new(5, 4),
            ],
            Some(Direction::Left),
            4,
        );
        game.set_snake(snake);
        game.place_food(food_at(5, 4, 0));
        let mut input = InputLatch::new();
        input.set(InputKey::Up, true);

        let report = game.update(301.0, &input);

        assert_eq!(report.collision, None);
        assert_eq!(game.score(), 1);
        assert_eq!(game.snake().length(), 5);
        assert_eq!(
            game.snake().parts(),
            &[
                Vector2i::new(5, 4),
                Vector2i::new(5, 5),
                Vector2i::new(6, 5),
                Vector2i::new(6, 4),
            ]
        );
    }

    #[test]
    fn test_only_first_of_stacked_foods_is_eaten() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(6, 5), 2));
        game.place_food(food_at(7, 5, 0));
        game.place_food(food_at(7, 5, 1));

        game.update(301.0, &InputLatch::new());

        assert_eq!(game.score(), 1);
        assert_eq!(game.foods(), &[food_at(7, 5, 1)]);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(9, 3), 2));

        let report = game.update(301.0, &InputLatch::new());

        assert_eq!(report.collision, Some(CollisionType::Wall));
        assert_eq!(game.state(), SessionState::GameOver);
        assert_eq!(game.snake().head(), Vector2i::new(10, 3));
    }

    #[test]
    fn test_collision_aborts_remaining_steps_and_spawns() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(8, 3), 2));

        // Enough time for 10 steps and 2 spawns, but the wall is 2 steps away
        let report = game.update(3001.0, &InputLatch::new());

        assert_eq!(report.steps, 2);
        assert_eq!(report.foods_spawned, 0);
        assert!(game.foods().is_empty());
        assert_eq!(game.snake().head(), Vector2i::new(10, 3));
    }

    #[test]
    fn test_fatal_bite_still_scores() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(9, 3), 2));
        game.place_food(food_at(10, 3, 1));

        let report = game.update(301.0, &InputLatch::new());

        assert_eq!(report.collision, Some(CollisionType::Wall));
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn test_self_collision() {
        let mut game = session();
        // Head at (5,5) moving up into a loop: (5,4) is occupied by the body
        let snake = SnakeState::from_parts(
            vec![
                Vector2i::new(5, 5),
                Vector2i::new(6, 5),
                Vector2i::new(6, 4),
                Vector2i::new(5, 4),
                Vector2i::new(4, 4),
            ],
            Some(Direction::Left),
            5,
        );
        game.set_snake(snake);
        let mut input = InputLatch::new();
        input.set(InputKey::Up, true);

        let report = game.update(301.0, &input);

        assert_eq!(report.collision, Some(CollisionType::SelfCollision));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_following_own_tail_is_safe() {
        let mut game = session();
        // 2x2 loop: the head moves into the cell the tail is leaving
        let snake = SnakeState::from_parts(
            vec![
                Vector2i::new(5, 5),
                Vector2i::new(6, 5),
                Vector2i::new(6, 4),
                Vector2i::new(5, 4),
            ],
            Some(Direction::Left),
            4,
        );
        game.set_snake(snake);
        let mut input = InputLatch::new();
        input.set(InputKey::Up, true);

        let report = game.update(301.0, &input);

        assert_eq!(report.collision, None);
        assert_eq!(game.snake().head(), Vector2i::new(5, 4));
    }

    #[test]
    fn test_direction_priority() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(5, 5), 2));
        let mut input = InputLatch::new();
        input.set(InputKey::Down, true);
        input.set(InputKey::Up, true);

        game.update(0.0, &input);
        assert_eq!(game.snake().new_dir(), Direction::Up);
    }

    #[test]
    fn test_reversal_skipped_for_next_candidate() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(5, 5), 2));
        let mut input = InputLatch::new();
        input.set(InputKey::Left, true);
        input.set(InputKey::Down, true);

        game.update(0.0, &input);
        assert_eq!(game.snake().new_dir(), Direction::Down);
    }

    #[test]
    fn test_game_over_ignores_time_until_restart() {
        let mut game = session();
        game.set_snake(straight_right(Vector2i::new(9, 3), 2));
        game.place_food(food_at(10, 3, 0));
        game.update(301.0, &InputLatch::new());
        assert!(game.is_game_over());

        let parts = game.snake().parts().to_vec();
        let report = game.update(10_000.0, &InputLatch::new());
        assert_eq!(report, TickReport::default());
        assert_eq!(game.snake().parts(), parts.as_slice());
        assert_eq!(game.score(), 1);

        let mut input = InputLatch::new();
        input.set(InputKey::Restart, true);
        let report = game.update(16.0, &input);
        assert!(report.restarted);
        assert_eq!(report.steps, 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.state(), SessionState::Playing);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = session();
        game.place_food(food_at(0, 0, 0));
        let mut input = InputLatch::new();
        input.set(InputKey::Restart, true);

        let report = game.update(10.0, &input);
        assert!(!report.restarted);
        assert_eq!(game.foods().len(), 1);
    }

    #[test]
    fn test_spawn_cadence_follows_delta() {
        let mut game = session();
        let input = InputLatch::new();

        let mut spawned = 0;
        for _ in 0..5 {
            spawned += game.update(300.0, &input).foods_spawned;
        }
        assert_eq!(spawned, 1);
        assert_eq!(game.foods(), &[food_at(0, 0, 0)]);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = GameSession::seeded(GameConfig::new(0, 5), 1);
        assert!(matches!(result, Err(GameError::InvalidGrid { .. })));
    }

    #[test]
    fn test_snapshot() {
        let mut game = session();
        game.place_food(food_at(2, 3, 1));
        let view = game.snapshot();

        assert_eq!(view.parts, &[Vector2i::new(5, 5)]);
        assert_eq!(view.foods.len(), 1);
        assert_eq!(view.score, 0);
        assert!(!view.game_over);
        assert_eq!(view.grid.width(), 10);
    }
}
