//! Room Layouts
//!
//! Builds the room graph: single rooms, explicit connections, grids and
//! fully connected clusters. Generated rooms are named "Room 1", "Room 2",
//! ... continuing from the rooms already in the maze.

use crate::components::{Maze, RoomId};
use crate::error::{MazeError, Result};

fn next_room_name(maze: &Maze) -> String {
    format!("Room {}", maze.size() + 1)
}

/// Adds `count` generated rooms and returns their ids in creation order.
fn add_numbered_rooms(maze: &mut Maze, count: usize) -> Vec<RoomId> {
    (0..count)
        .map(|_| {
            let name = next_room_name(maze);
            maze.add_room(name)
        })
        .collect()
}

/// Adds `rows * columns` rooms in row-major order, each connected to the
/// rooms directly above, below, left and right of it.
pub fn build_grid(maze: &mut Maze, rows: usize, columns: usize) -> Result<Vec<RoomId>> {
    if rows == 0 || columns == 0 {
        return Err(MazeError::InvalidArgument(format!(
            "grid dimensions must be positive, got {}x{}",
            rows, columns
        )));
    }

    let rooms = add_numbered_rooms(maze, rows * columns);
    let at = |row: usize, col: usize| rooms[row * columns + col];

    for row in 0..rows {
        for col in 0..columns {
            if col + 1 < columns {
                maze.connect(at(row, col), at(row, col + 1))?;
            }
            if row + 1 < rows {
                maze.connect(at(row, col), at(row + 1, col))?;
            }
        }
    }

    Ok(rooms)
}

/// Adds `count` rooms, each connected to every other one.
pub fn build_fully_connected(maze: &mut Maze, count: usize) -> Result<Vec<RoomId>> {
    if count == 0 {
        return Err(MazeError::InvalidArgument(
            "room count must be positive".to_string(),
        ));
    }

    let rooms = add_numbered_rooms(maze, count);
    for (i, &a) in rooms.iter().enumerate() {
        for &b in &rooms[i + 1..] {
            maze.connect(a, b)?;
        }
    }

    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_counts(maze: &Maze) -> Vec<usize> {
        maze.rooms().iter().map(|r| r.neighbors().len()).collect()
    }

    #[test]
    fn test_grid_3x3_neighbor_counts() {
        let mut maze = Maze::new();
        build_grid(&mut maze, 3, 3).unwrap();
        assert_eq!(maze.size(), 9);
        assert_eq!(neighbor_counts(&maze), vec![2, 3, 2, 3, 4, 3, 2, 3, 2]);
    }

    #[test]
    fn test_grid_counts_for_many_sizes() {
        for rows in 1..=5 {
            for columns in 1..=5 {
                let mut maze = Maze::new();
                build_grid(&mut maze, rows, columns).unwrap();
                assert_eq!(maze.size(), rows * columns);

                for (index, room) in maze.rooms().iter().enumerate() {
                    let (row, col) = (index / columns, index % columns);
                    let expected = [
                        row > 0,
                        row + 1 < rows,
                        col > 0,
                        col + 1 < columns,
                    ]
                    .iter()
                    .filter(|&&present| present)
                    .count();
                    assert_eq!(
                        room.neighbors().len(),
                        expected,
                        "{}x{} room {}",
                        rows,
                        columns,
                        index
                    );
                }
            }
        }
    }

    #[test]
    fn test_grid_line_degenerates() {
        let mut maze = Maze::new();
        build_grid(&mut maze, 1, 4).unwrap();
        assert_eq!(neighbor_counts(&maze), vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_grid_single_room_has_no_neighbors() {
        let mut maze = Maze::new();
        build_grid(&mut maze, 1, 1).unwrap();
        assert_eq!(neighbor_counts(&maze), vec![0]);
    }

    #[test]
    fn test_grid_rejects_zero() {
        let mut maze = Maze::new();
        assert!(matches!(build_grid(&mut maze, 0, 3), Err(MazeError::InvalidArgument(_))));
        assert!(matches!(build_grid(&mut maze, 3, 0), Err(MazeError::InvalidArgument(_))));
        assert_eq!(maze.size(), 0);
    }

    #[test]
    fn test_fully_connected() {
        for n in 1..=6 {
            let mut maze = Maze::new();
            build_fully_connected(&mut maze, n).unwrap();
            assert_eq!(maze.size(), n);
            assert!(neighbor_counts(&maze).iter().all(|&c| c == n - 1));
            for room in maze.rooms() {
                assert!(!room.is_neighbor(room.id));
            }
        }
    }

    #[test]
    fn test_fully_connected_rejects_zero() {
        let mut maze = Maze::new();
        assert!(build_fully_connected(&mut maze, 0).is_err());
    }

    #[test]
    fn test_room_names_continue_numbering() {
        let mut maze = Maze::new();
        maze.add_room("Room 1");
        build_fully_connected(&mut maze, 2).unwrap();
        let names: Vec<&str> = maze.rooms().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Room 1", "Room 2", "Room 3"]);
    }
}
