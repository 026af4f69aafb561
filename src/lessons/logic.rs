//! Boolean values and logical expressions

use std::io::Write;

use crate::config::LessonsConfig;
use crate::console::{fmt_bool, Console};
use crate::error::LessonResult;
use crate::lesson::Outcome;

pub fn bool_vars(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    writeln!(console, "true : {}", fmt_bool(true))?;
    writeln!(console, "false: {}", fmt_bool(false))?;
    writeln!(console)?;

    let mut is_valid = true;
    writeln!(console, "Valid? {}", fmt_bool(is_valid))?;
    is_valid = false;
    writeln!(console, "Still valid? {}", fmt_bool(is_valid))?;
    writeln!(console)?;

    console.prompt("Enter a boolean value (0 for false, 1 for true): ")?;
    let some_bool = console.read_bool()?;
    writeln!(console, "You entered {}.", fmt_bool(some_bool))?;
    Ok(Outcome::Completed)
}

/// Equality checks followed by a table of all four relations in both directions
pub fn comparison(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter x: ")?;
    let x = console.read_int()?;
    console.prompt("Enter y: ")?;
    let y = console.read_int()?;

    writeln!(console)?;

    writeln!(console, "x == y? {}", fmt_bool(x == y))?;
    writeln!(console, "x != y? {}", fmt_bool(x != y))?;

    writeln!(console)?;

    writeln!(console, "Relation: <   <=  >   >=")?;
    writeln!(console, "------------------------")?;
    for (label, lhs, rhs) in [("x OP y? | ", x, y), ("y OP x? | ", y, x)] {
        writeln!(
            console,
            "{}{}   {}   {}   {}",
            label,
            fmt_bool(lhs < rhs),
            fmt_bool(lhs <= rhs),
            fmt_bool(lhs > rhs),
            fmt_bool(lhs >= rhs)
        )?;
    }
    Ok(Outcome::Completed)
}

/// Whether the player beats a monster of `monster_level`
pub fn beats_monster(god_mode: bool, player_level: i32, sword_strength: i32, monster_level: i32) -> bool {
    god_mode || i64::from(player_level) + i64::from(sword_strength) > i64::from(monster_level)
}

pub fn mixed_expressions(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter your level: ")?;
    let player_level = console.read_int()?;

    console.prompt("Enter your sword's strength: ")?;
    let sword_strength = console.read_int()?;

    console.prompt("Are you a cheater? ")?;
    let is_player_in_god_mode = console.read_bool()?;

    let winning = beats_monster(
        is_player_in_god_mode,
        player_level,
        sword_strength,
        config.logic.monster_level,
    );

    writeln!(console, "You beat the monster: {}", fmt_bool(winning))?;
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::{find, run_transcript};

    fn transcript(name: &str, input: &str) -> String {
        let lesson = find(name).unwrap();
        run_transcript(lesson, input, &LessonsConfig::default()).unwrap().1
    }

    #[test]
    fn test_bool_vars() {
        assert_eq!(
            transcript("bool-vars", "1\n"),
            "true : 1\nfalse: 0\n\nValid? 1\nStill valid? 0\n\n\
             Enter a boolean value (0 for false, 1 for true): You entered 1.\n"
        );
    }

    #[test]
    fn test_comparison_table() {
        let text = transcript("comparison", "3\n5\n");
        assert_eq!(
            text,
            "Enter x: Enter y: \n\
             x == y? 0\nx != y? 1\n\n\
             Relation: <   <=  >   >=\n\
             ------------------------\n\
             x OP y? | 1   1   0   0\n\
             y OP x? | 0   0   1   1\n"
        );
    }

    #[test]
    fn test_comparison_equal_values() {
        let text = transcript("comparison", "4 4");
        assert!(text.contains("x == y? 1\n"));
        assert!(text.contains("x OP y? | 0   1   0   1\n"));
    }

    #[test]
    fn test_beats_monster() {
        assert!(beats_monster(true, 0, 0, 12));
        assert!(beats_monster(false, 10, 3, 12));
        assert!(!beats_monster(false, 10, 2, 12));
        assert!(!beats_monster(false, i32::MIN, i32::MIN, 12));
    }

    #[test]
    fn test_mixed_expressions() {
        assert_eq!(
            transcript("mixed-expressions", "5 5 0"),
            "Enter your level: Enter your sword's strength: Are you a cheater? \
             You beat the monster: 0\n"
        );
        assert!(transcript("mixed-expressions", "1 1 1").ends_with("monster: 1\n"));
    }
}
