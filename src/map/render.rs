//! ASCII map rendering.
//!
//! Render is a pure function of the [`MapModel`]: it allocates a local
//! character arena per call, draws discovered connections first and
//! room boxes second, and returns the joined rows. The pass order is a
//! hard guarantee: a box cell is always whatever the box pass wrote,
//! so connection glyphs never bleed inside a room's border.
//!
//! Geometry: each room owns a 4-wide, 3-tall box at a 4-column,
//! 3-row stride from its configured grid position. Positions are
//! spaced, so unconnected grid cells form the gaps the dotted
//! connection lines run through.

use crate::map::model::{MapModel, MapRoom};
use crate::world::registry::LevelId;
use crate::world::types::Direction;

const CORNER: char = '+';
const H_BORDER: char = '-';
const V_BORDER: char = '|';
const PATH_DOT: char = '.';
const UP_MARK: char = '^';
const DOWN_MARK: char = 'v';

const BOX_W: usize = 4;
const BOX_H: usize = 3;

/// Local drawing arena; never outlives one render call.
struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
    rows: usize,
}

impl Grid {
    fn new(cols: usize, rows: usize) -> Self {
        Grid {
            cells: vec![vec![' '; cols]; rows],
            cols,
            rows,
        }
    }

    /// Write unconditionally (box pass).
    fn put(&mut self, col: usize, row: usize, glyph: char) {
        if row < self.rows && col < self.cols {
            self.cells[row][col] = glyph;
        }
    }

    /// Write only into blank cells (connection pass).
    fn put_soft(&mut self, col: usize, row: usize, glyph: char) {
        if row < self.rows && col < self.cols && self.cells[row][col] == ' ' {
            self.cells[row][col] = glyph;
        }
    }

    fn join(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Top-left arena cell of a room box, given the level bounding box.
fn box_origin(room: &MapRoom, min: (u32, u32)) -> (usize, usize) {
    let col = (room.position.0 - min.0) as usize * BOX_W;
    let row = (room.position.1 - min.1) as usize * BOX_H;
    (col, row)
}

/// Render the discovered portion of one level.
pub fn render(model: &MapModel, level: LevelId) -> String {
    let visited = model.visited_on_level(level);
    if visited.is_empty() {
        return String::new();
    }

    let min_x = visited.iter().map(|r| r.position.0).min().unwrap_or(0);
    let min_y = visited.iter().map(|r| r.position.1).min().unwrap_or(0);
    let max_x = visited.iter().map(|r| r.position.0).max().unwrap_or(0);
    let max_y = visited.iter().map(|r| r.position.1).max().unwrap_or(0);
    let min = (min_x, min_y);

    let width = (max_x - min_x + 1) as usize;
    let height = (max_y - min_y + 1) as usize;
    let mut grid = Grid::new((width * BOX_W).max(BOX_W), (height * BOX_H).max(BOX_H));

    // First pass: connections between mutually visited rooms. Blank
    // cells only; whatever is already drawn stays. Up/down markers go
    // in ahead of the dotted lines so a passing path never claims the
    // marker's cell.
    for &room in &visited {
        draw_markers(&mut grid, model, room, min);
    }
    for &room in &visited {
        draw_paths(&mut grid, model, room, min);
    }

    // Second pass: the boxes themselves, drawn over everything.
    for &room in &visited {
        draw_box(&mut grid, model, room, min);
    }

    grid.join()
}

/// Up and down are single markers hugging the box; they never draw a
/// line, and never cross levels visually.
fn draw_markers(grid: &mut Grid, model: &MapModel, room: &MapRoom, min: (u32, u32)) {
    let (col, row) = box_origin(room, min);
    for (direction, target) in room.exits.open() {
        if !model.is_visited(target) {
            continue;
        }
        match direction {
            Direction::Up => {
                if row > 0 {
                    grid.put_soft(col + 1, row - 1, UP_MARK);
                }
            }
            Direction::Down => {
                grid.put_soft(col + 1, row + BOX_H, DOWN_MARK);
            }
            _ => {}
        }
    }
}

fn draw_paths(grid: &mut Grid, model: &MapModel, room: &MapRoom, min: (u32, u32)) {
    let (col, row) = box_origin(room, min);
    for (direction, target) in room.exits.open() {
        if !model.is_visited(target) {
            continue;
        }
        let target_room = match model.room(target) {
            Some(r) => r,
            None => continue,
        };
        match direction {
            // Horizontal paths run along the source row's vertical
            // center, dotted through the gap between the boxes.
            Direction::East | Direction::West => {
                if target_room.level != room.level {
                    continue;
                }
                let (t_col, _) = box_origin(target_room, min);
                let (from, to) = if t_col > col {
                    (col + BOX_W, t_col)
                } else {
                    (t_col + BOX_W, col)
                };
                for (step, c) in (from..to).enumerate() {
                    if step % 2 == 0 {
                        grid.put_soft(c, row + 1, PATH_DOT);
                    }
                }
            }
            // South paths drop down the column at the box's center.
            // North exits draw nothing; the neighbor's south edge
            // covers the shared gap.
            Direction::South => {
                if target_room.level != room.level {
                    continue;
                }
                let (_, t_row) = box_origin(target_room, min);
                if t_row <= row {
                    continue;
                }
                for (step, r) in (row + BOX_H..t_row).enumerate() {
                    if step % 2 == 0 {
                        grid.put_soft(col + 1, r, PATH_DOT);
                    }
                }
            }
            Direction::North => {}
            Direction::Up | Direction::Down => {}
        }
    }
}

fn draw_box(grid: &mut Grid, model: &MapModel, room: &MapRoom, min: (u32, u32)) {
    let (col, row) = box_origin(room, min);

    grid.put(col, row, CORNER);
    grid.put(col + 1, row, H_BORDER);
    grid.put(col + 2, row, H_BORDER);
    grid.put(col + 3, row, CORNER);

    let occupant = if room.is_current {
        model.player_char
    } else {
        room.display_char
    };
    let indicator = if room.has_items { model.item_char } else { ' ' };
    grid.put(col, row + 1, V_BORDER);
    grid.put(col + 1, row + 1, occupant);
    grid.put(col + 2, row + 1, indicator);
    grid.put(col + 3, row + 1, V_BORDER);

    grid.put(col, row + 2, CORNER);
    grid.put(col + 1, row + 2, H_BORDER);
    grid.put(col + 2, row + 2, H_BORDER);
    grid.put(col + 3, row + 2, CORNER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::model::MapModel;
    use crate::world::titles::Chateau;
    use crate::world::TitleDefinition;

    fn model() -> MapModel {
        let chateau = Chateau::new();
        MapModel::new(chateau.catalog(), &chateau.content().rooms)
    }

    fn lines(rendered: &str) -> Vec<&str> {
        rendered.lines().collect()
    }

    #[test]
    fn test_single_room_renders_minimum_box() {
        let model = model();
        let rendered = render(&model, model.current_level);
        let rows = lines(&rendered);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "+--+");
        assert_eq!(rows[1].chars().next(), Some('|'));
        assert!(rows[1].contains('@'), "current room shows the player glyph");
        assert_eq!(rows[2], "+--+");
    }

    #[test]
    fn test_unvisited_level_renders_empty() {
        let model = model();
        assert_eq!(render(&model, 3), "");
    }

    #[test]
    fn test_connection_drawn_between_visited_neighbors() {
        let mut model = model();
        // Foyer (2,2) and library (0,2) are east/west neighbors with a
        // one-unit gap between their boxes.
        model.update_player_position(2);
        let rendered = render(&model, 1);
        let rows = lines(&rendered);
        // Library box cols 0..3, foyer box cols 8..11; the dotted path
        // sits in cols 4..7 of the shared center row.
        let center = rows[1];
        assert_eq!(&center[4..8], ". . ");
    }

    #[test]
    fn test_unvisited_neighbor_draws_no_connection() {
        let model = model();
        let rendered = render(&model, 1);
        assert!(
            !rendered.contains(PATH_DOT),
            "start room alone has no discovered connections:\n{}",
            rendered
        );
    }

    #[test]
    fn test_boxes_win_over_connections() {
        let mut model = model();
        model.update_player_position(2);
        model.update_player_position(1);
        model.update_player_position(3);
        let rendered = render(&model, 1);
        // Every box cell must hold exactly a box glyph: borders,
        // occupant, or indicator space; never a path dot.
        let rows = lines(&rendered);
        let visited = model.visited_on_level(1);
        let min = (
            visited.iter().map(|r| r.position.0).min().unwrap(),
            visited.iter().map(|r| r.position.1).min().unwrap(),
        );
        for room in model.visited_on_level(1) {
            let (col, row) = box_origin(room, min);
            for r in row..row + BOX_H {
                for c in col..col + BOX_W {
                    let glyph = rows[r].chars().nth(c).unwrap();
                    assert_ne!(
                        glyph, PATH_DOT,
                        "path dot inside box of room {} at ({}, {})",
                        room.number, c, r
                    );
                }
            }
        }
    }

    #[test]
    fn test_up_down_markers_are_single_glyphs() {
        let mut model = model();
        // Walk to the staircase, then up to the landing; coming back
        // down leaves both staircase and landing visited.
        model.update_player_position(6);
        model.update_player_position(10);
        model.update_player_position(6);
        let rendered = render(&model, 1);
        assert!(
            rendered.contains(UP_MARK),
            "staircase shows an up marker once the landing is known:\n{}",
            rendered
        );
    }

    #[test]
    fn test_items_indicator_inside_box() {
        let mut model = model();
        let start = model.current_room;
        model.update_room_items(start, true);
        let with_items = render(&model, model.current_level);
        assert!(with_items.contains("|@+|"));
        model.update_room_items(start, false);
        let without = render(&model, model.current_level);
        assert!(without.contains("|@ |"));
    }

    #[test]
    fn test_render_is_pure() {
        let mut model = model();
        model.update_player_position(2);
        let first = render(&model, 1);
        let second = render(&model, 1);
        assert_eq!(first, second);
    }
}
