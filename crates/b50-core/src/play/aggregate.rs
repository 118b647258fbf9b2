use serde::Serialize;

use crate::config::caps::{DX_CAP, SD_CAP};
use crate::play::{Player, Score};

/// Rating sums for the sd (35) and dx (15) slices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingSums {
    pub sd: u64,
    pub dx: u64,
}

impl RatingSums {
    pub fn total(&self) -> u64 {
        self.sd.saturating_add(self.dx)
    }
}

/// Best and worst aggregation of one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub best: RatingSums,
    pub bad: RatingSums,
}

impl Summary {
    pub fn compute(player: &Player) -> Self {
        Self {
            best: compute_best(player),
            bad: compute_bad(player),
        }
    }
}

fn sum_ra<'a>(scores: impl IntoIterator<Item = &'a Score>, cap: usize) -> u64 {
    scores
        .into_iter()
        .take(cap)
        .fold(0, |acc, s| acc.saturating_add(s.ra))
}

/// Sum of the top 35 sd and top 15 dx ratings
///
/// Expects pools sorted highest first, as `parse_data` leaves them.
pub fn compute_best(player: &Player) -> RatingSums {
    RatingSums {
        sd: sum_ra(&player.sd, SD_CAP),
        dx: sum_ra(&player.dx, DX_CAP),
    }
}

/// Sum of the lowest 35 sd and lowest 15 dx non-zero ratings
pub fn compute_bad(player: &Player) -> RatingSums {
    fn lowest(pool: &[Score]) -> Vec<&Score> {
        let mut rated: Vec<&Score> = pool.iter().filter(|s| s.ra > 0).collect();
        rated.sort_by_key(|s| s.ra);
        rated
    }

    RatingSums {
        sd: sum_ra(lowest(&player.sd), SD_CAP),
        dx: sum_ra(lowest(&player.dx), DX_CAP),
    }
}
