//! ASCII board rendering: wall glyphs on cell edges, uppercase robot
//! initials, lowercase goal initials (`*` for the any-robot goal), `#`
//! for the blocked center cells. This is what `{:?}` on a
//! [`Puzzle`](crate::Puzzle) prints, so a failing generation test shows
//! the board it was complaining about.

use crate::skeleton::center_cells;
use crate::walls::WallSet;
use rebound_core::{Direction, Goal, GoalColor, Position, Robot, RobotSet, BOARD_SIZE};

fn cell_glyph(position: Position, robots: Option<&RobotSet>, goals: &[Goal]) -> char {
    if let Some(robots) = robots {
        match robots.occupant(position) {
            Some(Robot::Red) => return 'R',
            Some(Robot::Yellow) => return 'Y',
            Some(Robot::Green) => return 'G',
            Some(Robot::Blue) => return 'B',
            None => {}
        }
    }
    if let Some(goal) = goals.iter().find(|g| g.position == position) {
        return match goal.color {
            GoalColor::Red => 'r',
            GoalColor::Yellow => 'y',
            GoalColor::Green => 'g',
            GoalColor::Blue => 'b',
            GoalColor::Any => '*',
        };
    }
    if center_cells().contains(&position) {
        return '#';
    }
    ' '
}

/// Render walls, optional robots, and goals as a multi-line string.
///
/// Each cell is three characters wide; `---` marks a horizontal wall,
/// `|` a vertical one, and the outer border is always drawn.
pub fn render(walls: &WallSet, robots: Option<&RobotSet>, goals: &[Goal]) -> String {
    let size = BOARD_SIZE as usize;
    // Each row contributes an edge line and a cell line; one extra edge
    // line closes the bottom border.
    let mut out = String::with_capacity((size * 2 + 1) * (size * 4 + 2));

    for y in 0..BOARD_SIZE {
        // Edge line above row y.
        for x in 0..BOARD_SIZE {
            let pos = Position::from_index(y * BOARD_SIZE + x);
            let above = y == 0 || walls.is_blocking(pos, Direction::Up);
            out.push('+');
            out.push_str(if above { "---" } else { "   " });
        }
        out.push_str("+\n");

        // Cell line for row y.
        for x in 0..BOARD_SIZE {
            let pos = Position::from_index(y * BOARD_SIZE + x);
            let left = x == 0 || walls.is_blocking(pos, Direction::Left);
            out.push(if left { '|' } else { ' ' });
            out.push(' ');
            out.push(cell_glyph(pos, robots, goals));
            out.push(' ');
        }
        out.push_str("|\n");
    }

    // Bottom border.
    for _ in 0..size {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::add_center_block;

    fn p(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn render_has_expected_shape() {
        let walls = WallSet::new();
        let text = render(&walls, None, &[]);
        let lines: Vec<&str> = text.lines().collect();
        // 16 edge lines + 16 cell lines + closing border.
        assert_eq!(lines.len(), 33);
        for line in &lines {
            assert_eq!(line.len(), 16 * 4 + 1);
        }
        // Top border is solid.
        assert!(lines[0].chars().all(|c| c == '+' || c == '-'));
    }

    #[test]
    fn center_block_renders_walls_and_hash() {
        let mut walls = WallSet::new();
        add_center_block(&mut walls);
        let text = render(&walls, None, &[]);
        assert!(text.contains('#'));
        // Row 7's edge line must carry walls above columns 7 and 8.
        let edge_line_row7 = text.lines().nth(7 * 2).unwrap();
        assert_eq!(&edge_line_row7[7 * 4..7 * 4 + 8], "+---+---");
    }

    #[test]
    fn robots_and_goals_render_initials() {
        let walls = WallSet::new();
        let robots = RobotSet::new(p(0, 0), p(1, 0), p(2, 0), p(3, 0));
        let goals = [Goal::new(p(5, 5), GoalColor::Green), Goal::new(p(6, 6), GoalColor::Any)];
        let text = render(&walls, Some(&robots), &goals);
        for glyph in ['R', 'Y', 'G', 'B', 'g', '*'] {
            assert!(text.contains(glyph), "missing {glyph}");
        }
    }
}
