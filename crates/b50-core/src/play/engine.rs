use strum::IntoStaticStr;
use tracing::{debug, trace};

use crate::chart::{ExclusionSet, ReferenceTable};
use crate::config::record::MUSIC_ID_LIMIT;
use crate::config::version::CURRENT_VERSION;
use crate::play::{MusicDetailGroup, Player, RawRecord, Score};
use crate::score::compute_rating;

/// Why a raw record produced no score
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum SkipReason {
    #[strum(serialize = "music id out of range")]
    OutOfRange,
    #[strum(serialize = "excluded")]
    Excluded,
    #[strum(serialize = "no reference entry")]
    Unmatched,
}

/// Where a rated play goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Sd,
    Dx,
}

/// Counters for a single parse run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub kept: usize,
    pub out_of_range: usize,
    pub excluded: usize,
    pub unmatched: usize,
}

impl ParseStats {
    pub fn skipped(&self) -> usize {
        self.out_of_range + self.excluded + self.unmatched
    }

    pub fn total(&self) -> usize {
        self.kept + self.skipped()
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::OutOfRange => self.out_of_range += 1,
            SkipReason::Excluded => self.excluded += 1,
            SkipReason::Unmatched => self.unmatched += 1,
        }
    }
}

/// Rates raw records against borrowed reference data
#[derive(Debug, Clone, Copy)]
pub struct RatingEngine<'a> {
    table: &'a ReferenceTable,
    exclusions: &'a ExclusionSet,
}

impl<'a> RatingEngine<'a> {
    pub fn new(table: &'a ReferenceTable, exclusions: &'a ExclusionSet) -> Self {
        Self { table, exclusions }
    }

    /// Rate a single record, or say why it does not count
    pub fn score(&self, record: &RawRecord) -> Result<(Pool, Score), SkipReason> {
        if record.music_id >= i64::from(MUSIC_ID_LIMIT) {
            return Err(SkipReason::OutOfRange);
        }
        // Negative ids can never match a table row
        let music_id = u32::try_from(record.music_id).map_err(|_| SkipReason::Unmatched)?;
        if self.exclusions.contains(music_id) {
            return Err(SkipReason::Excluded);
        }

        let level = record.chart_level().ok_or(SkipReason::Unmatched)?;
        let entry = self
            .table
            .find(music_id, level)
            .ok_or(SkipReason::Unmatched)?;

        let score = Score {
            id: music_id,
            level,
            constant: entry.constant,
            combo: record.combo_status,
            sync: record.sync_status,
            ra: compute_rating(entry.constant, record.achievement_percent()),
        };
        let pool = if entry.add_version == CURRENT_VERSION {
            Pool::Dx
        } else {
            Pool::Sd
        };

        Ok((pool, score))
    }

    /// Rate every record in every group and build sorted pools
    pub fn parse(&self, groups: &[MusicDetailGroup]) -> (Player, ParseStats) {
        let mut player = Player::new();
        let mut stats = ParseStats::default();

        for record in groups.iter().flat_map(|g| &g.user_music_detail_list) {
            match self.score(record) {
                Ok((pool, score)) => {
                    trace!(
                        "music {} lv{} -> ra {} ({:?})",
                        score.id, score.level, score.ra, pool
                    );
                    stats.kept += 1;
                    match pool {
                        Pool::Dx => player.dx.push(score),
                        Pool::Sd => player.sd.push(score),
                    }
                }
                Err(reason) => {
                    let reason_str: &'static str = reason.into();
                    debug!(
                        "Skipping music {} level {}: {}",
                        record.music_id, record.level, reason_str
                    );
                    stats.record_skip(reason);
                }
            }
        }

        player.sort_pools();
        (player, stats)
    }
}

/// Build sorted sd/dx pools from raw record groups
pub fn parse_data(
    groups: &[MusicDetailGroup],
    table: &ReferenceTable,
    exclusions: &ExclusionSet,
) -> Player {
    RatingEngine::new(table, exclusions).parse(groups).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ReferenceEntry;

    fn entry(id: u32, level: u8, constant: f64, add_version: u32) -> ReferenceEntry {
        ReferenceEntry {
            id,
            level,
            constant,
            add_version,
        }
    }

    fn record(music_id: i64, level: i32, achievement: i64) -> RawRecord {
        RawRecord {
            music_id,
            level,
            combo_status: 0,
            sync_status: 0,
            achievement,
        }
    }

    fn group(records: Vec<RawRecord>) -> MusicDetailGroup {
        MusicDetailGroup {
            user_music_detail_list: records,
        }
    }

    #[test]
    fn test_current_version_goes_to_dx() {
        let table: ReferenceTable = [entry(1, 1, 10.0, 21)].into_iter().collect();
        let exclusions = ExclusionSet::new();
        let engine = RatingEngine::new(&table, &exclusions);

        let raw = RawRecord {
            music_id: 1,
            level: 0,
            combo_status: 1,
            sync_status: 0,
            achievement: 1_000_000,
        };
        let (pool, score) = engine.score(&raw).unwrap();

        assert_eq!(pool, Pool::Dx);
        assert_eq!(score.id, 1);
        assert_eq!(score.level, 1);
        assert_eq!(score.combo, 1);
        assert_eq!(score.sync, 0);
        // 100.0% is in the [100, 100.5) bracket: 10.0 * 1.0 * 21.6
        assert_eq!(score.ra, 216);
    }

    #[test]
    fn test_older_version_goes_to_sd() {
        let table: ReferenceTable = [entry(1, 1, 10.0, 20)].into_iter().collect();
        let exclusions = ExclusionSet::new();
        let engine = RatingEngine::new(&table, &exclusions);

        let (pool, _) = engine.score(&record(1, 0, 1_000_000)).unwrap();
        assert_eq!(pool, Pool::Sd);
    }

    #[test]
    fn test_skip_reasons() {
        let table: ReferenceTable = [entry(1, 1, 10.0, 21), entry(100_000, 1, 10.0, 21)]
            .into_iter()
            .collect();
        let exclusions: ExclusionSet = [2].into_iter().collect();
        let engine = RatingEngine::new(&table, &exclusions);

        assert_eq!(
            engine.score(&record(100_000, 0, 1_000_000)),
            Err(SkipReason::OutOfRange)
        );
        assert_eq!(
            engine.score(&record(2, 0, 1_000_000)),
            Err(SkipReason::Excluded)
        );
        // level 1 raw -> 2, table only has level 1
        assert_eq!(
            engine.score(&record(1, 1, 1_000_000)),
            Err(SkipReason::Unmatched)
        );
        assert_eq!(
            engine.score(&record(3, 0, 1_000_000)),
            Err(SkipReason::Unmatched)
        );
    }

    #[test]
    fn test_excluded_wins_over_matching_entry() {
        let table: ReferenceTable = [entry(5, 1, 13.0, 21)].into_iter().collect();
        let exclusions: ExclusionSet = [5].into_iter().collect();

        let player = parse_data(
            &[group(vec![record(5, 0, 1_005_000)])],
            &table,
            &exclusions,
        );
        assert!(player.is_empty());
    }

    #[test]
    fn test_parse_stats_and_partition() {
        let table: ReferenceTable = [
            entry(1, 1, 10.0, 21),
            entry(2, 4, 13.5, 19),
            entry(3, 5, 14.2, 21),
        ]
        .into_iter()
        .collect();
        let exclusions: ExclusionSet = [9].into_iter().collect();
        let engine = RatingEngine::new(&table, &exclusions);

        let groups = vec![
            group(vec![record(1, 0, 990_000), record(2, 3, 1_004_000)]),
            group(vec![
                record(3, 4, 970_000),
                record(9, 0, 1_000_000),
                record(123_456, 0, 1_000_000),
                record(4, 0, 1_000_000),
            ]),
        ];

        let (player, stats) = engine.parse(&groups);

        assert_eq!(stats.kept, 3);
        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.out_of_range, 1);
        assert_eq!(stats.unmatched, 1);
        assert_eq!(stats.total(), 6);
        assert_eq!(player.dx.len() + player.sd.len(), stats.kept);
        assert_eq!(player.dx.len(), 2);
        assert_eq!(player.sd.len(), 1);

        // dx sorted highest first: 14.2 * 0.97 * 20.0 = 275.48, 10.0 * 0.99 * 20.8 = 205.92
        let dx: Vec<u64> = player.dx.iter().map(|s| s.ra).collect();
        assert_eq!(dx, vec![275, 205]);
    }

    #[test]
    fn test_wide_id_and_negative_achievement_are_not_fatal() {
        let table: ReferenceTable = [entry(1, 1, 10.0, 20), entry(2, 1, 12.0, 21)]
            .into_iter()
            .collect();
        let exclusions = ExclusionSet::new();
        let engine = RatingEngine::new(&table, &exclusions);

        let groups = vec![group(vec![
            record(5_000_000_000, 0, 1_000_000),
            record(-3, 0, 1_000_000),
            record(1, 0, -5),
            record(2, 0, 1_005_000),
        ])];

        let (player, stats) = engine.parse(&groups);

        assert_eq!(stats.out_of_range, 1);
        assert_eq!(stats.unmatched, 1);
        assert_eq!(stats.kept, 2);
        assert_eq!(player.sd.len(), 1);
        assert_eq!(player.sd[0].id, 1);
        assert_eq!(player.sd[0].ra, 0);
        assert_eq!(player.dx.len(), 1);

        let same = parse_data(&groups, &table, &exclusions);
        assert_eq!(same, player);
    }

    #[test]
    fn test_empty_input() {
        let table = ReferenceTable::new();
        let exclusions = ExclusionSet::new();
        let (player, stats) = RatingEngine::new(&table, &exclusions).parse(&[]);
        assert!(player.is_empty());
        assert_eq!(stats, ParseStats::default());
    }
}
