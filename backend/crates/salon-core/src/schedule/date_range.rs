use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Monday and Sunday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}

/// Month shown by a view. The calendar and the board each keep their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Date window selector on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRangePreset {
    Today,
    ThisWeek,
    NextWeek,
    WholeMonth,
}

impl DateRangePreset {
    /// Inclusive bounds. Week presets are relative to `today`, never to any
    /// appointment; the month preset follows the board's own cursor.
    pub fn bounds(&self, today: NaiveDate, board_month: MonthCursor) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Today => (today, today),
            Self::ThisWeek => week_bounds(today),
            Self::NextWeek => week_bounds(today + Duration::days(7)),
            Self::WholeMonth => (board_month.first_day(), board_month.last_day()),
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate, board_month: MonthCursor) -> bool {
        let (first, last) = self.bounds(today, board_month);
        first <= date && date <= last
    }
}
