use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// First month fetched when no range is given.
pub const DEFAULT_FROM: YearMonth = YearMonth {
    year: 2015,
    month: 5,
};

/// Exclusive end of the default range.
pub const DEFAULT_TO: YearMonth = YearMonth {
    year: 2017,
    month: 2,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("Month must be between 1 and 12, got {0}")]
    BadMonth(u32),
    #[error("Year must be positive, got {0}")]
    BadYear(i32),
    #[error("Date must be in YYYYMM or YYYY-MM format: {0}")]
    BadFormat(String),
}

/// A year and month pair, also readable as the integer `year * 100 + month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CursorError> {
        if year <= 0 {
            return Err(CursorError::BadYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(CursorError::BadMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn from_yyyymm(date: i32) -> Result<Self, CursorError> {
        if date < 0 {
            return Err(CursorError::BadFormat(date.to_string()));
        }
        Self::new(date / 100, (date % 100) as u32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn as_yyyymm(&self) -> i32 {
        self.year * 100 + self.month as i32
    }

    /// Moves to the following month, rolling December over into January.
    pub fn advance(&mut self) {
        self.month += 1;
        if self.month == 13 {
            self.month = 1;
            self.year += 1;
        }
    }

    pub fn following(self) -> Self {
        let mut next = self;
        next.advance();
        next
    }

    /// Every month from `self` up to, but not including, `to`.
    pub fn months_until(self, to: YearMonth) -> Months {
        Months { current: self, to }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = match s.split_once('-') {
            Some((year, month)) => (year, month),
            None if s.len() == 6 && s.is_ascii() => s.split_at(4),
            None => return Err(CursorError::BadFormat(s.to_string())),
        };

        if year.len() != 4
            || month.is_empty()
            || month.len() > 2
            || !year.chars().all(|c| c.is_ascii_digit())
            || !month.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CursorError::BadFormat(s.to_string()));
        }

        let year = year
            .parse::<i32>()
            .map_err(|_| CursorError::BadFormat(s.to_string()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| CursorError::BadFormat(s.to_string()))?;
        Self::new(year, month)
    }
}

/// Iterator produced by [`YearMonth::months_until`].
#[derive(Debug, Clone)]
pub struct Months {
    current: YearMonth,
    to: YearMonth,
}

impl Iterator for Months {
    type Item = YearMonth;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.to {
            return None;
        }
        let month = self.current;
        self.current.advance();
        Some(month)
    }
}
