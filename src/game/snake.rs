use super::vector::{Direction, Vector2i};

/// The snake's body and movement state
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    /// Body segments, with head at index 0
    parts: Vec<Vector2i>,
    /// Target body length; the tail is trimmed down to this on each step
    length: usize,
    /// Direction taken by the last step, `None` before the first one
    dir: Option<Direction>,
    /// Direction the next step will take
    new_dir: Direction,
    /// Time accumulated towards the next step
    move_elapsed: f64,
    spawn: Vector2i,
}

impl SnakeState {
    /// A single-segment snake at `spawn` that will set off in `initial_dir`
    pub fn new(spawn: Vector2i, initial_dir: Direction, length: usize) -> Self {
        Self {
            parts: vec![spawn],
            length: length.max(1),
            dir: None,
            new_dir: initial_dir,
            move_elapsed: 0.0,
            spawn,
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// `length` is raised to the number of segments if it is smaller.
    pub fn from_parts(parts: Vec<Vector2i>, dir: Option<Direction>, length: usize) -> Self {
        let spawn = parts.first().copied().unwrap_or_default();
        let length = length.max(parts.len()).max(1);
        Self {
            new_dir: dir.unwrap_or(Direction::Right),
            parts,
            length,
            dir,
            move_elapsed: 0.0,
            spawn,
        }
    }

    pub fn parts(&self) -> &[Vector2i] {
        &self.parts
    }

    pub fn head(&self) -> Vector2i {
        self.parts.first().copied().unwrap_or(self.spawn)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn dir(&self) -> Option<Direction> {
        self.dir
    }

    pub fn new_dir(&self) -> Direction {
        self.new_dir
    }

    /// Queue a direction for the next step.
    ///
    /// A reversal of the committed direction is ignored. Returns whether the
    /// request was taken.
    pub fn request_direction(&mut self, candidate: Direction) -> bool {
        if self.dir.is_some_and(|dir| dir.is_opposite(candidate)) {
            return false;
        }
        self.new_dir = candidate;
        true
    }

    /// Where the head will land on the next step
    pub fn peek_head(&self) -> Vector2i {
        self.head().moved_in_direction(self.new_dir)
    }

    /// Advance one cell, returning the new head position
    pub fn step(&mut self) -> Vector2i {
        let new_head = self.peek_head();
        self.dir = Some(self.new_dir);
        self.parts.insert(0, new_head);
        self.parts.truncate(self.length);
        new_head
    }

    /// Lengthen the snake by one; the tail stays put on the next step
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Whether the head shares a cell with any other segment
    pub fn head_hits_body(&self) -> bool {
        match self.parts.split_first() {
            Some((head, body)) => body.contains(head),
            None => false,
        }
    }

    /// Time accumulated towards the next step
    pub fn move_elapsed(&self) -> f64 {
        self.move_elapsed
    }

    pub fn add_elapsed(&mut self, delta: f64) {
        self.move_elapsed += delta;
    }

    /// Take one interval off the accumulator if more than that has built up
    pub fn step_due(&mut self, interval: f64) -> bool {
        if self.move_elapsed > interval {
            self.move_elapsed -= interval;
            true
        } else {
            false
        }
    }
}
