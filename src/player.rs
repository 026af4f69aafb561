//! Player aggregates used by the user-type lessons
//!
//! The same data (a position and a score) is modelled several ways so the
//! lessons can contrast them: loose scalars, a struct with public fields, a
//! struct nesting a [`Point`], and a struct hiding its fields behind accessors.

use std::io::{self, Write};

/// 2D integer position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Player with flat public fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub points: i32,
}

impl Player {
    pub fn new(x: i32, y: i32, points: i32) -> Self {
        Self { x, y, points }
    }
}

/// Player that keeps its coordinates in a nested [`Point`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionedPlayer {
    pub position: Point,
    pub n_points: i32,
}

impl PositionedPlayer {
    pub fn new(position: Point, n_points: i32) -> Self {
        Self { position, n_points }
    }

    pub fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        draw_player(out, self.position.x, self.position.y, self.n_points)
    }
}

/// Player whose state is only reachable through accessors and mutators
#[derive(Debug, Clone, Default)]
pub struct EncapsulatedPlayer {
    position: Point,
    n_points: i32,
}

impl EncapsulatedPlayer {
    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.position.x = x;
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.position.y = y;
    }

    pub fn n_points(&self) -> i32 {
        self.n_points
    }

    pub fn set_n_points(&mut self, n_points: i32) {
        self.n_points = n_points;
    }

    /// Copy of the current position
    pub fn position(&self) -> Point {
        self.position
    }
}

/// Print `Player at {x},{y} with {points} points.`
pub fn draw_player(out: &mut dyn Write, x: i32, y: i32, points: i32) -> io::Result<()> {
    writeln!(out, "Player at {},{} with {} points.", x, y, points)
}

/// Advance the round counter in place and announce the new round
pub fn next_round(game_round: &mut u32, out: &mut dyn Write) -> io::Result<()> {
    *game_round += 1;
    writeln!(out, "Round {}:", game_round)
}
