//! Liturgical year engine
//!
//! Pure computation over in-memory event lists, with no I/O.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `event` | Event model, rank and color tags |
//! | `rank` | Dominant event and display ordering |
//! | `cycles` | Sunday/weekday lectionary cycles, first Sunday of Advent |
//! | `boundary` | The seven dates delimiting a liturgical year |
//! | `weeks` | Week-of-season arithmetic |
//! | `classify` | Season and week for one date |
//! | `year_map` | Season and week for every day of a year |
//! | `augment` | Synthesized weekday events |

mod augment;
mod boundary;
mod classify;
mod cycles;
mod event;
mod rank;
mod season;
mod weeks;
mod year_map;

pub use augment::{augment, augment_with, weekday_event, weekday_name};
pub use boundary::{locate as locate_boundaries, Anchor, BoundaryDates, BoundaryError};
pub use classify::classify;
pub use cycles::{cycles_for, first_sunday_of_advent, month_cycles, MonthCycles};
pub use event::{
    format_date, parse_date, EventError, LiturgicalColor, LiturgicalEvent, Rank, SundayCycle,
    WeekdayCycle, DATE_FORMAT,
};
pub use rank::{display_order, dominant, sort_for_display};
pub use season::{LiturgicalDayContext, LiturgicalSeason};
pub use weeks::{
    ordinary_time_week, week_of_season, week_of_year, weeks_in_year, OrdinaryTimeWeeks,
    LAST_ORDINARY_WEEK, PENTECOST_WEEK_OFFSET,
};
pub use year_map::{
    build_year_map, build_year_map_with, map_year, try_build_year_map, CalendarOptions,
    LiturgicalYearMap,
};
