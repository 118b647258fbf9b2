use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum ComboStatus {
    #[default]
    #[strum(serialize = "-")]
    None = 0,
    #[strum(serialize = "FC")]
    FullCombo = 1,
    #[strum(serialize = "FC+")]
    FullComboPlus = 2,
    #[strum(serialize = "AP")]
    AllPerfect = 3,
    #[strum(serialize = "AP+")]
    AllPerfectPlus = 4,
}

impl ComboStatus {
    pub fn from_raw(value: i32) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_repr)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ComboStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum SyncStatus {
    #[default]
    #[strum(serialize = "-")]
    None = 0,
    #[strum(serialize = "FS")]
    FullSync = 1,
    #[strum(serialize = "FS+")]
    FullSyncPlus = 2,
    #[strum(serialize = "FDX")]
    FullSyncDx = 3,
    #[strum(serialize = "FDX+")]
    FullSyncDxPlus = 4,
    #[strum(serialize = "SYNC")]
    SyncPlay = 5,
}

impl SyncStatus {
    pub fn from_raw(value: i32) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_repr)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_status_from_raw() {
        assert_eq!(ComboStatus::from_raw(0), Some(ComboStatus::None));
        assert_eq!(ComboStatus::from_raw(3), Some(ComboStatus::AllPerfect));
        assert_eq!(ComboStatus::from_raw(5), None);
        assert_eq!(ComboStatus::from_raw(-1), None);
    }

    #[test]
    fn test_sync_status_from_raw() {
        assert_eq!(SyncStatus::from_raw(4), Some(SyncStatus::FullSyncDxPlus));
        assert_eq!(SyncStatus::from_raw(5), Some(SyncStatus::SyncPlay));
        assert_eq!(SyncStatus::from_raw(6), None);
    }

    #[test]
    fn test_status_ordering() {
        assert!(ComboStatus::AllPerfectPlus > ComboStatus::FullComboPlus);
        assert!(SyncStatus::FullSyncDx > SyncStatus::FullSyncPlus);
    }

    #[test]
    fn test_short_names() {
        assert_eq!(ComboStatus::FullComboPlus.to_string(), "FC+");
        assert_eq!(SyncStatus::FullSyncDxPlus.to_string(), "FDX+");
        assert_eq!(ComboStatus::None.short_name(), "-");
    }
}
