//! Clock snapshot and date units

use chrono::{Local, NaiveDateTime};

/// Date or time unit selected by a `'d` template token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    /// `y`, two-digit year
    ShortYear,
    /// `Y`, four-digit year
    FullYear,
    /// `m`, month 01-12
    Month,
    /// `d`, day of month 01-31
    Day,
    /// `H`, hour 00-23
    Hour,
    /// `M`, minute 00-59
    Minute,
    /// `s`, yyyymmdd
    StandardDate,
    /// `t`, hhmm
    ShortTime,
}

impl DateUnit {
    /// Looks up the unit for a template character
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'y' => Some(DateUnit::ShortYear),
            'Y' => Some(DateUnit::FullYear),
            'm' => Some(DateUnit::Month),
            'd' => Some(DateUnit::Day),
            'H' => Some(DateUnit::Hour),
            'M' => Some(DateUnit::Minute),
            's' => Some(DateUnit::StandardDate),
            't' => Some(DateUnit::ShortTime),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            DateUnit::ShortYear => 'y',
            DateUnit::FullYear => 'Y',
            DateUnit::Month => 'm',
            DateUnit::Day => 'd',
            DateUnit::Hour => 'H',
            DateUnit::Minute => 'M',
            DateUnit::StandardDate => 's',
            DateUnit::ShortTime => 't',
        }
    }

    /// strftime format for the unit
    pub fn format_str(&self) -> &'static str {
        match self {
            DateUnit::ShortYear => "%y",
            DateUnit::FullYear => "%Y",
            DateUnit::Month => "%m",
            DateUnit::Day => "%d",
            DateUnit::Hour => "%H",
            DateUnit::Minute => "%M",
            DateUnit::StandardDate => "%Y%m%d",
            DateUnit::ShortTime => "%H%M",
        }
    }
}

/// The single timestamp used for every date token of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot(NaiveDateTime);

impl ClockSnapshot {
    /// Takes the snapshot from the local clock
    pub fn now() -> Self {
        ClockSnapshot(Local::now().naive_local())
    }

    pub fn format(&self, unit: DateUnit) -> String {
        self.0.format(unit.format_str()).to_string()
    }
}

impl From<NaiveDateTime> for ClockSnapshot {
    fn from(datetime: NaiveDateTime) -> Self {
        ClockSnapshot(datetime)
    }
}
