//! Grouping related values into user-defined types

use std::io::Write;

use crate::config::LessonsConfig;
use crate::console::Console;
use crate::error::LessonResult;
use crate::lesson::Outcome;
use crate::player::{
    draw_player, next_round, EncapsulatedPlayer, Player, Point, PositionedPlayer,
};

/// Two players tracked with six loose variables
pub fn player_flat(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    let mut game_round = 0u32;
    let (mut player_a_x, player_a_y, player_a_points) = (0, 0, 0);
    let (player_b_x, player_b_y, player_b_points) = (0, 0, 0);

    next_round(&mut game_round, console)?;
    draw_player(console, player_a_x, player_a_y, player_a_points)?;
    draw_player(console, player_b_x, player_b_y, player_b_points)?;

    next_round(&mut game_round, console)?;
    // Move player a right a bit
    player_a_x += 5;
    draw_player(console, player_a_x, player_a_y, player_a_points)?;
    Ok(Outcome::Completed)
}

fn draw(console: &mut Console<'_>, player: Player) -> LessonResult<()> {
    draw_player(console, player.x, player.y, player.points)?;
    Ok(())
}

pub fn player_struct(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    let mut game_round = 0u32;
    let (mut player_a, player_b) = (Player::default(), Player::default());

    next_round(&mut game_round, console)?;
    draw(console, player_a)?;
    draw(console, player_b)?;

    next_round(&mut game_round, console)?;
    player_a.x += 5;
    draw(console, player_a)?;
    Ok(Outcome::Completed)
}

fn print_player(console: &mut Console<'_>, player: Player) -> LessonResult<()> {
    writeln!(console, "{},{}: {}", player.x, player.y, player.points)?;
    Ok(())
}

/// Literal, reassigned, partial and temporary initialization
pub fn player_init(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    let mut player = Player { x: 5, y: 3, points: 100 };
    print_player(console, player)?;
    player = Player::new(1, 2, 3);
    print_player(console, player)?;

    let player_b = Player {
        x: 5,
        ..Default::default()
    };
    print_player(console, player_b)?;

    let player_c = Player::new(1, 2, 42);
    print_player(console, player_c)?;

    print_player(console, Player::new(10, 7, 250))?;
    Ok(Outcome::Completed)
}

pub fn player_method(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    let player_a = PositionedPlayer::default();
    let player_b = PositionedPlayer::new(Point::new(2, 3), 1);
    player_a.draw(console)?;
    player_b.draw(console)?;
    Ok(Outcome::Completed)
}

fn draw_hidden(console: &mut Console<'_>, player: &EncapsulatedPlayer) -> LessonResult<()> {
    draw_player(console, player.x(), player.y(), player.n_points())?;
    Ok(())
}

pub fn player_hidden(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    let mut player = EncapsulatedPlayer::default();
    player.set_x(1);
    player.set_y(2);
    player.set_n_points(10);

    draw_hidden(console, &player)?;
    Ok(Outcome::Completed)
}
