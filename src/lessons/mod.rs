//! The lesson programs, one module per category

pub mod conditionals;
pub mod functions;
pub mod logic;
pub mod loops;
pub mod user_types;
pub mod variables;

use crate::lesson::{Category, Lesson};

/// Catalog of all lessons in display order
pub static ALL: &[Lesson] = &[
    // Variables
    Lesson {
        name: "vars-basic",
        category: Category::Variables,
        summary: "Circle measures for a fixed radius",
        program: variables::vars_basic,
    },
    Lesson {
        name: "circle-input",
        category: Category::Variables,
        summary: "Circle measures for a radius read from input",
        program: variables::circle_input,
    },
    Lesson {
        name: "circle-const",
        category: Category::Variables,
        summary: "Circle measures using only immutable bindings",
        program: variables::circle_const,
    },
    // Logic
    Lesson {
        name: "bool-vars",
        category: Category::Logic,
        summary: "Printing, reassigning and reading booleans",
        program: logic::bool_vars,
    },
    Lesson {
        name: "comparison",
        category: Category::Logic,
        summary: "Equality and relational operators on two integers",
        program: logic::comparison,
    },
    Lesson {
        name: "mixed-expressions",
        category: Category::Logic,
        summary: "Combining arithmetic and logical operators",
        program: logic::mixed_expressions,
    },
    // Conditionals
    Lesson {
        name: "nested-ride",
        category: Category::Conditionals,
        summary: "Nested if/else deciding who may ride",
        program: conditionals::nested_ride,
    },
    Lesson {
        name: "sort-three",
        category: Category::Conditionals,
        summary: "Sorting three numbers with inline swaps",
        program: conditionals::sort_three,
    },
    Lesson {
        name: "switch-calc",
        category: Category::Conditionals,
        summary: "One binary operation chosen with match",
        program: conditionals::switch_calc,
    },
    // Loops
    Lesson {
        name: "while-counter",
        category: Category::Loops,
        summary: "Counting with a while loop",
        program: loops::while_counter,
    },
    Lesson {
        name: "rectangle",
        category: Category::Loops,
        summary: "Nested loops painting a rectangle",
        program: loops::rectangle,
    },
    Lesson {
        name: "pyramid",
        category: Category::Loops,
        summary: "Nested loops building a left-aligned or centered pyramid",
        program: loops::pyramid,
    },
    Lesson {
        name: "sum-break",
        category: Category::Loops,
        summary: "Summing until a target with break",
        program: loops::sum_break,
    },
    Lesson {
        name: "sum-break-if",
        category: Category::Loops,
        summary: "Summing until a target with a loop condition",
        program: loops::sum_break_if,
    },
    Lesson {
        name: "add-until-zero",
        category: Category::Loops,
        summary: "Accumulating values until 0 is entered",
        program: loops::add_until_zero,
    },
    Lesson {
        name: "mini-calc",
        category: Category::Loops,
        summary: "Interactive calculator with error checks",
        program: loops::mini_calc,
    },
    // Functions
    Lesson {
        name: "sepline",
        category: Category::Functions,
        summary: "A function without parameters",
        program: functions::sepline,
    },
    Lesson {
        name: "sepline-params",
        category: Category::Functions,
        summary: "A function with parameters",
        program: functions::sepline_params,
    },
    Lesson {
        name: "pass-by-value",
        category: Category::Functions,
        summary: "Arguments are copied into the callee",
        program: functions::pass_by_value,
    },
    Lesson {
        name: "square",
        category: Category::Functions,
        summary: "Functions returning values",
        program: functions::square,
    },
    Lesson {
        name: "absolutize",
        category: Category::Functions,
        summary: "Modifying the caller's variable through a mutable reference",
        program: functions::absolutize_lesson,
    },
    Lesson {
        name: "minmax",
        category: Category::Functions,
        summary: "Two results through output references",
        program: functions::minmax_lesson,
    },
    Lesson {
        name: "swap-sort-three",
        category: Category::Functions,
        summary: "Sorting three numbers with a swap function",
        program: functions::swap_sort_three,
    },
    Lesson {
        name: "reciprocal",
        category: Category::Functions,
        summary: "Returning a nonzero exit status on bad input",
        program: functions::reciprocal,
    },
    // User types
    Lesson {
        name: "player-flat",
        category: Category::UserTypes,
        summary: "Players as loose variables",
        program: user_types::player_flat,
    },
    Lesson {
        name: "player-struct",
        category: Category::UserTypes,
        summary: "Players as a struct with public fields",
        program: user_types::player_struct,
    },
    Lesson {
        name: "player-init",
        category: Category::UserTypes,
        summary: "Ways to initialize a struct",
        program: user_types::player_init,
    },
    Lesson {
        name: "player-method",
        category: Category::UserTypes,
        summary: "A nested struct with a draw method",
        program: user_types::player_method,
    },
    Lesson {
        name: "player-hidden",
        category: Category::UserTypes,
        summary: "Private fields behind accessors",
        program: user_types::player_hidden,
    },
];
