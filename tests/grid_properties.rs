// Property-based tests for calendar grid construction
// Random months, selections and configurations

mod fixtures;

use calendar_grid::models::date::CalendarDate;
use calendar_grid::models::grid::{CalendarGrid, GridCell, GridConfig};
use calendar_grid::services::grid::CalendarGridBuilder;
use calendar_grid::utils::date::{add_days, days_in_month};
use chrono::{Datelike, NaiveDate};
use fixtures::date;
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = CalendarDate> {
    (1900..2100i32, 1..=12u32, 1..=28u32).prop_map(|(y, m, d)| date(y, m, d))
}

fn arb_config() -> impl Strategy<Value = GridConfig> {
    (
        0..=6u8,
        any::<bool>(),
        proptest::option::of(arb_date()),
        proptest::option::of(arb_date()),
    )
        .prop_map(|(first_day_of_week, disable_weekends, min_date, max_date)| GridConfig {
            min_date,
            max_date,
            first_day_of_week,
            disable_weekends,
        })
}

fn build(config: GridConfig, reference: CalendarDate, selected: CalendarDate, today: CalendarDate) -> CalendarGrid {
    CalendarGridBuilder::new(config)
        .unwrap()
        .build_for_today(reference, selected, today)
        .unwrap()
}

/// Date occupying position `index`, blank or not.
fn position_date(grid: &CalendarGrid, index: usize) -> CalendarDate {
    add_days(grid.start(), index as i64).unwrap()
}

proptest! {
    /// Property: grids are whole weeks, between one and six of them
    #[test]
    fn prop_grid_length_is_whole_weeks(
        config in arb_config(),
        reference in arb_date(),
        selected in arb_date(),
    ) {
        let grid = build(config, reference, selected, selected);
        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!(grid.len() >= 7 && grid.len() <= 42);
    }

    /// Property: every day of the month appears exactly once
    #[test]
    fn prop_every_day_covered_once(
        config in arb_config(),
        reference in arb_date(),
    ) {
        let grid = build(config, reference, reference, reference);
        let days_in = days_in_month(reference.year(), reference.month());

        for day in 1..=days_in {
            let wanted = date(reference.year(), reference.month(), day);
            let hits = grid.cells().iter().filter(|cell| cell.date() == Some(wanted)).count();
            prop_assert_eq!(hits, 1, "day {} appeared {} times", wanted, hits);
        }
        prop_assert_eq!(grid.in_month_cells().count(), days_in as usize);
    }

    /// Property: cells line up with their position and blanks are exactly
    /// the days outside the reference month
    #[test]
    fn prop_cells_match_positions(
        config in arb_config(),
        reference in arb_date(),
    ) {
        let grid = build(config, reference, reference, reference);
        for (index, cell) in grid.cells().iter().enumerate() {
            let at = position_date(&grid, index);
            match cell {
                GridCell::Blank => {
                    prop_assert!(!at.same_month(&reference));
                }
                GridCell::InMonth { date, .. } => {
                    prop_assert_eq!(*date, at);
                    prop_assert!(date.same_month(&reference));
                }
            }
        }
    }

    /// Property: first column is first_day_of_week, last column the day before it
    #[test]
    fn prop_weekday_alignment(
        first_day_of_week in 0..=6u8,
        reference in arb_date(),
    ) {
        let config = GridConfig::default().with_first_day_of_week(first_day_of_week);
        let grid = build(config, reference, reference, reference);

        prop_assert_eq!(grid.start().weekday_index(), first_day_of_week);
        let last = position_date(&grid, grid.len() - 1);
        prop_assert_eq!(last.weekday_index(), (first_day_of_week + 6) % 7);

        // No whole week of padding at either end
        prop_assert!(grid.weeks().all(|week| week.iter().any(|cell| !cell.is_blank())));
    }

    /// Property: at most one today cell and at most one active cell
    #[test]
    fn prop_at_most_one_today_and_active(
        config in arb_config(),
        reference in arb_date(),
        selected in arb_date(),
        today in arb_date(),
    ) {
        let grid = build(config, reference, selected, today);
        let todays = grid.cells().iter().filter(|c| c.is_today()).count();
        let actives = grid.cells().iter().filter(|c| c.is_active()).count();
        prop_assert!(todays <= 1);
        prop_assert!(actives <= 1);
        prop_assert_eq!(actives == 1, selected.same_month(&reference));
        prop_assert_eq!(todays == 1, today.same_month(&reference));
    }

    /// Property: disabled flags follow min, max and weekend rules exactly
    #[test]
    fn prop_disabled_rules(
        config in arb_config(),
        reference in arb_date(),
    ) {
        let grid = build(config, reference, reference, reference);
        for cell in grid.in_month_cells() {
            let day = cell.date().unwrap();
            let expected = config.min_date.map_or(false, |min| day < min)
                || config.max_date.map_or(false, |max| day > max)
                || (config.disable_weekends && matches!(day.weekday_index(), 0 | 6));
            prop_assert_eq!(cell.is_disabled(), expected, "mismatch on {}", day);
        }
    }

    /// Property: the day of the month used as reference does not matter
    #[test]
    fn prop_reference_day_irrelevant(
        config in arb_config(),
        reference in arb_date(),
        other_day in 1..=28u32,
    ) {
        let same_month = date(reference.year(), reference.month(), other_day);
        let a = build(config, reference, reference, reference);
        let b = build(config, same_month, reference, reference);
        prop_assert_eq!(a, b);
    }

    /// Property: every month a `CalendarDate` can name has a grid
    #[test]
    fn prop_any_supported_month_builds(
        year in (NaiveDate::MIN.year() + 1)..NaiveDate::MAX.year(),
        month in 1..=12u32,
        first_day_of_week in 0..=6u8,
    ) {
        let reference = date(year, month, 1);
        let grid = CalendarGridBuilder::new(GridConfig::default().with_first_day_of_week(first_day_of_week))
            .unwrap()
            .build_for_today(reference, reference, reference);
        prop_assert!(grid.is_ok(), "no grid for {}", reference);
        let grid = grid.unwrap();
        prop_assert_eq!(grid.in_month_cells().count() as u32, days_in_month(year, month));
    }
}
