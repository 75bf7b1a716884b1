//! Damage report model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single good/damaged count declared for an item on a given day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageReport {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub item_id: i64,
    pub date: NaiveDate,
    pub good_quantity: i64,
    pub damage_quantity: i64,
}

impl DamageReport {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}
