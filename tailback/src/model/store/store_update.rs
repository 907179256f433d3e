use tailback_core::model::CongestionNumericOverride;

/// outcome of applying one action to the congestion override store.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum StoreUpdate {
    #[default]
    Unchanged,
    Upserted {
        created: CongestionNumericOverride,
        /// overrides removed because they overlapped `created`
        replaced: Vec<CongestionNumericOverride>,
    },
    Restored(CongestionNumericOverride),
}

impl StoreUpdate {
    pub fn is_changed(&self) -> bool {
        !matches!(self, StoreUpdate::Unchanged)
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreUpdate::Unchanged => "unchanged",
            StoreUpdate::Upserted { .. } => "upserted",
            StoreUpdate::Restored(_) => "restored",
        }
    }
}
