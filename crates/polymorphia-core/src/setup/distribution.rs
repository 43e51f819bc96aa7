//! Population Distribution
//!
//! Places batches of characters and food into rooms under a chosen policy.

use serde::{Deserialize, Serialize};

use crate::components::{Maze, Placeable, RoomId};
use crate::error::{MazeError, Result};
use crate::rng::RandomSource;

/// How new items are assigned to rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionPolicy {
    /// Each item goes to a uniformly chosen room
    Random,
    /// Rooms are filled round-robin in list order
    #[default]
    Sequential,
}

/// Applies a distribution policy.
///
/// The sequential cursor lives as long as the distributor, so successive
/// batches continue where the last one stopped: no room receives a second
/// item of any kind until every room has one.
#[derive(Debug, Clone, Default)]
pub struct Distributor {
    policy: DistributionPolicy,
    cursor: usize,
}

impl Distributor {
    pub fn new(policy: DistributionPolicy) -> Self {
        Self { policy, cursor: 0 }
    }

    pub fn policy(&self) -> DistributionPolicy {
        self.policy
    }

    /// Switches policy. The sequential cursor is kept.
    pub fn set_policy(&mut self, policy: DistributionPolicy) {
        self.policy = policy;
    }

    fn next_room(&mut self, targets: &[RoomId], rng: &mut dyn RandomSource) -> RoomId {
        match self.policy {
            DistributionPolicy::Random => targets[rng.uniform_int(targets.len())],
            DistributionPolicy::Sequential => {
                let room = targets[self.cursor % targets.len()];
                self.cursor += 1;
                room
            }
        }
    }

    /// Places every item into one of `targets`.
    pub fn distribute(
        &mut self,
        maze: &mut Maze,
        items: impl IntoIterator<Item = Placeable>,
        targets: &[RoomId],
        rng: &mut dyn RandomSource,
    ) -> Result<()> {
        if targets.is_empty() {
            return Err(MazeError::InvalidState(
                "cannot distribute into a maze with no rooms".to_string(),
            ));
        }
        for item in items {
            let room = self.next_room(targets, rng);
            maze.place(item, room)?;
        }
        Ok(())
    }
}
